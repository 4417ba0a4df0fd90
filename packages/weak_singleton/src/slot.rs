use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock, Weak};

use hash_hasher::HashedMap;

use crate::ERR_POISONED_LOCK;

/// The storage unit for one factory identity: a non-owning reference to the most recently
/// constructed instance.
///
/// The mutex is held across the whole check-expired, construct and store sequence, so two callers
/// of the same slot can never both observe an expired instance and both construct a new one.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    current: Mutex<Weak<T>>,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            current: Mutex::new(Weak::new()),
        }
    }

    /// Returns the live instance, constructing a new one via `factory` if there is none.
    ///
    /// If `factory` fails (by returning an error or by panicking), the slot is left untouched,
    /// which means still expired, and the next call will try again from scratch.
    pub(crate) fn get_or_try_create<E>(
        &self,
        factory: impl FnOnce() -> Result<T, E>,
    ) -> Result<Arc<T>, E> {
        // A panicking factory poisons the mutex but never leaves the slot half-written, because
        // we only store an instance after the factory has successfully returned it.
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = current.upgrade() {
            tracing::trace!(instance_type = type_name::<T>(), "reusing live singleton instance");
            return Ok(instance);
        }

        tracing::debug!(instance_type = type_name::<T>(), "constructing singleton instance");

        // This is the only strong reference until it is handed to the caller. The slot itself
        // only ever keeps the weak reference.
        let instance = Arc::new(factory()?);
        *current = Arc::downgrade(&instance);

        Ok(instance)
    }

    /// Returns the live instance without constructing one.
    pub(crate) fn peek(&self) -> Option<Arc<T>> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .upgrade()
    }
}

// Keys are `TypeId`s, whose `Hash` impl already feeds well-distributed bits to the hasher, so the
// pass-through `HashedMap` hasher is enough. Values are `Slot<T>` behind `dyn Any`, one `T` per
// key. Entries are only ever added: an expired instance leaves its empty slot behind for reuse.
type SlotRegistry = HashedMap<TypeId, Arc<dyn Any + Send + Sync>>;

static GLOBAL_REGISTRY: LazyLock<RwLock<SlotRegistry>> =
    LazyLock::new(|| RwLock::new(SlotRegistry::default()));

/// Returns the slot registered under `key`, registering an empty one if this is the first use.
///
/// The registry lock is only held for the lookup itself, never while a factory runs, so a
/// factory is free to request instances from other slots.
///
/// # Panics
///
/// Panics if `key` was previously used for a slot of a different instance type. Keys are derived
/// from types that determine `T`, so this does not happen through the public API.
pub(crate) fn slot<T>(key: TypeId) -> Arc<Slot<T>>
where
    T: Send + Sync + 'static,
{
    if let Some(slot) = find_slot(key) {
        return downcast(slot);
    }

    let mut registry = GLOBAL_REGISTRY.write().expect(ERR_POISONED_LOCK);

    // Another thread may have registered the slot between our read and write lock.
    let slot = registry
        .entry(key)
        .or_insert_with(|| Arc::new(Slot::<T>::new()));

    downcast(Arc::clone(slot))
}

fn find_slot(key: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
    GLOBAL_REGISTRY
        .read()
        .expect(ERR_POISONED_LOCK)
        .get(&key)
        .map(Arc::clone)
}

fn downcast<T>(slot: Arc<dyn Any + Send + Sync>) -> Arc<Slot<T>>
where
    T: Send + Sync + 'static,
{
    slot.downcast::<Slot<T>>()
        .expect("slot key was registered with a different instance type")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Slot<String>: Send, Sync);

    #[test]
    fn same_key_returns_same_slot() {
        struct Key;

        let a = slot::<u32>(TypeId::of::<Key>());
        let b = slot::<u32>(TypeId::of::<Key>());

        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_keys_return_different_slots() {
        struct KeyA;
        struct KeyB;

        let a = slot::<u32>(TypeId::of::<KeyA>());
        let b = slot::<u32>(TypeId::of::<KeyB>());

        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn reuses_live_instance() {
        let slot = Slot::new();

        let first = slot.get_or_try_create(|| Ok::<_, ()>(1)).unwrap();
        let second = slot.get_or_try_create(|| Ok::<_, ()>(2)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, 1);
    }

    #[test]
    fn reconstructs_after_expiry() {
        let slot = Slot::new();

        let first = slot.get_or_try_create(|| Ok::<_, ()>(1)).unwrap();
        drop(first);
        assert!(slot.peek().is_none());

        let second = slot.get_or_try_create(|| Ok::<_, ()>(2)).unwrap();
        assert_eq!(*second, 2);
    }

    #[test]
    fn failed_factory_leaves_slot_expired() {
        let slot = Slot::<u32>::new();

        let result = slot.get_or_try_create(|| Err("unavailable"));
        assert_eq!(result.unwrap_err(), "unavailable");
        assert!(slot.peek().is_none());

        let instance = slot.get_or_try_create(|| Ok::<_, &str>(5)).unwrap();
        assert_eq!(*instance, 5);
    }

    #[test]
    fn panicking_factory_leaves_slot_usable() {
        let slot = Slot::<u32>::new();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            slot.get_or_try_create(|| -> Result<u32, ()> { panic!("factory failed") })
        }));
        assert!(result.is_err());
        assert!(slot.peek().is_none());

        let instance = slot.get_or_try_create(|| Ok::<_, ()>(8)).unwrap();
        assert_eq!(*instance, 8);
    }

    #[test]
    #[should_panic]
    fn mismatched_instance_type_panics() {
        struct Key;

        let _registered = slot::<u32>(TypeId::of::<Key>());
        let _mismatched = slot::<String>(TypeId::of::<Key>());
    }
}
