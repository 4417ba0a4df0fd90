use std::any::TypeId;
use std::convert::Infallible;
use std::sync::Arc;

use crate::slot;

/// The slot of a factory is identified by the factory's own type together with the type it
/// produces, so two factories that produce the same type still get independent slots.
fn slot_key<F, T>() -> TypeId
where
    F: 'static,
    T: 'static,
{
    TypeId::of::<(F, T)>()
}

/// Returns the live instance created by `factory`, constructing it if no live instance exists.
///
/// The slot is identified by the type of `factory`. Every closure expression and every function
/// item has its own type, so each distinct factory in the source code has its own slot, even if
/// several of them produce the same `T`. Calling the same closure expression again (e.g. in a loop
/// or from a helper function) reuses the same slot.
///
/// While any strong reference returned from here is alive, every call with the same factory
/// returns that same instance and `factory` is not called. Once the last strong reference has been
/// dropped, the next call invokes `factory` again and returns a new instance.
///
/// # Factory identity
///
/// Coercing factories to a common function pointer type (e.g. `fn() -> T`) or boxing them as
/// trait objects erases their identity: all factories coerced to the same pointer type share one
/// slot.
///
/// # Thread safety
///
/// Concurrent callers of the same slot are serialized by a lock owned by that slot. At most one
/// instance per slot is alive at any time and the factory runs at most once per reconstruction
/// cycle, no matter how many threads ask at the same time.
///
/// The factory may itself call `get_or_create()` for other factories, as long as the chain of
/// nested requests never leads back to a slot that is still under construction. A factory that
/// requests its own slot deadlocks, and so does a cycle: if the factory of `A` requests `B` and
/// the factory of `B` requests `A`, constructing either one deadlocks, even on a single thread.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// struct DecoderTables {
///     entries: Vec<u32>,
/// }
///
/// fn tables() -> Arc<DecoderTables> {
///     weak_singleton::get_or_create(|| DecoderTables {
///         entries: (0..256).collect(),
///     })
/// }
///
/// let first = tables();
/// let second = tables();
///
/// // Both handles point to the same instance.
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.entries.len(), 256);
/// ```
pub fn get_or_create<F, T>(factory: F) -> Arc<T>
where
    F: FnOnce() -> T + 'static,
    T: Send + Sync + 'static,
{
    let Ok(instance): Result<Arc<T>, Infallible> =
        slot::<T>(slot_key::<F, T>()).get_or_try_create(|| Ok(factory()));

    instance
}

/// Like [`get_or_create()`] but passes `args` to the factory when it needs to run.
///
/// `args` is dropped unused if a live instance already exists. The slot is identified by the type
/// of `factory`, not by the arguments, so calling this with different arguments while an instance
/// is alive returns the existing instance.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// struct Pool {
///     capacity: usize,
/// }
///
/// fn shared_pool(capacity: usize) -> Arc<Pool> {
///     weak_singleton::get_or_create_with(|capacity| Pool { capacity }, capacity)
/// }
///
/// let pool = shared_pool(16);
///
/// // Still alive, so this does not construct a new pool with the new capacity.
/// assert_eq!(shared_pool(32).capacity, 16);
///
/// drop(pool);
/// assert_eq!(shared_pool(32).capacity, 32);
/// ```
pub fn get_or_create_with<F, A, T>(factory: F, args: A) -> Arc<T>
where
    F: FnOnce(A) -> T + 'static,
    T: Send + Sync + 'static,
{
    let Ok(instance): Result<Arc<T>, Infallible> =
        slot::<T>(slot_key::<F, T>()).get_or_try_create(|| Ok(factory(args)));

    instance
}

/// Like [`get_or_create()`] but with a factory that can fail.
///
/// # Errors
///
/// Returns the error of `factory` if it needed to run and failed. No instance is stored in that
/// case, so the next call runs the factory again.
///
/// # Example
///
/// ```
/// #[derive(Debug)]
/// struct Connection;
///
/// let result = weak_singleton::try_get_or_create(|| -> Result<Connection, String> {
///     Err("device offline".to_string())
/// });
///
/// assert_eq!(result.unwrap_err(), "device offline");
/// ```
pub fn try_get_or_create<F, T, E>(factory: F) -> Result<Arc<T>, E>
where
    F: FnOnce() -> Result<T, E> + 'static,
    T: Send + Sync + 'static,
{
    slot::<T>(slot_key::<F, T>()).get_or_try_create(factory)
}
