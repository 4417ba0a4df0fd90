use std::any::{Any, TypeId, type_name};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use hash_hasher::HashedMap;

/// Single-threaded counterpart of the process-wide slot, for instances that are not thread-safe.
#[derive(Debug)]
struct LocalSlot<T> {
    current: RefCell<Weak<T>>,
}

type LocalSlotRegistry = HashedMap<TypeId, Rc<dyn Any>>;

thread_local! {
    // Slots of every factory used via `get_or_create_local()` on the current thread. Values inside
    // are type-occluded `LocalSlot<T>` where T may be different for each entry.
    static LOCAL_REGISTRY: RefCell<LocalSlotRegistry> = RefCell::new(LocalSlotRegistry::default());
}

/// Returns the live instance created by `factory` on the current thread, constructing it if no
/// live instance exists on this thread.
///
/// This is the thread-local flavor of [`get_or_create()`][crate::get_or_create] for types that
/// are not `Send` or `Sync`. Slot identity follows the same rules (one slot per factory type), but
/// every thread has its own set of slots: two threads calling this with the same factory get
/// independent instances.
///
/// No lock is held while `factory` runs. If the factory requests its own slot, the inner call
/// constructs an instance and the outer call then replaces it in the slot.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// fn scratch() -> Rc<Cell<u32>> {
///     weak_singleton::get_or_create_local(|| Cell::new(0))
/// }
///
/// let a = scratch();
/// let b = scratch();
///
/// a.set(5);
/// assert_eq!(b.get(), 5);
/// ```
pub fn get_or_create_local<F, T>(factory: F) -> Rc<T>
where
    F: FnOnce() -> T + 'static,
    T: 'static,
{
    let slot = local_slot::<T>(TypeId::of::<(F, T)>());

    if let Some(instance) = slot.current.borrow().upgrade() {
        tracing::trace!(
            instance_type = type_name::<T>(),
            "reusing live thread-local singleton instance"
        );
        return instance;
    }

    tracing::debug!(
        instance_type = type_name::<T>(),
        "constructing thread-local singleton instance"
    );

    let instance = Rc::new(factory());
    *slot.current.borrow_mut() = Rc::downgrade(&instance);

    instance
}

fn local_slot<T>(key: TypeId) -> Rc<LocalSlot<T>>
where
    T: 'static,
{
    let slot = LOCAL_REGISTRY.with_borrow_mut(|registry| {
        Rc::clone(registry.entry(key).or_insert_with(|| {
            Rc::new(LocalSlot::<T> {
                current: RefCell::new(Weak::new()),
            })
        }))
    });

    slot.downcast::<LocalSlot<T>>()
        .expect("slot key was registered with a different instance type")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::thread;

    use super::*;

    #[test]
    fn shares_live_instance_on_same_thread() {
        let calls = Rc::new(Cell::new(0));

        let factory = {
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                Cell::new(calls.get())
            }
        };

        let first = get_or_create_local(factory.clone());
        let second = get_or_create_local(factory.clone());

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);

        drop(first);
        drop(second);

        let third = get_or_create_local(factory);
        assert_eq!(third.get(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn threads_have_independent_slots() {
        fn counter() -> Rc<Cell<u32>> {
            get_or_create_local(|| Cell::new(0))
        }

        let local = counter();
        local.set(10);

        thread::spawn(|| {
            let remote = counter();
            assert_eq!(remote.get(), 0);
            remote.set(20);
        })
        .join()
        .unwrap();

        assert_eq!(counter().get(), 10);
    }

    #[test]
    fn reentrant_factory_replaces_inner_instance() {
        fn nested() -> Rc<usize> {
            get_or_create_local(|| {
                thread_local!(static DEPTH: Cell<usize> = const { Cell::new(0) });

                let depth = DEPTH.get();
                DEPTH.set(depth + 1);

                let value = if depth == 0 { *nested() + 1 } else { 1 };

                DEPTH.set(depth);
                value
            })
        }

        let outer = nested();
        assert_eq!(*outer, 2);

        // The outer instance is the one that stays in the slot.
        assert!(Rc::ptr_eq(&outer, &nested()));
    }
}
