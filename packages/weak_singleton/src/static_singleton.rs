use std::any::{TypeId, type_name};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use crate::slot;

/// A named singleton declared via [`singleton!`][crate::singleton].
///
/// Every call to [`get()`][Self::get] returns the same instance for as long as at least one
/// caller keeps it alive. Once the last `Arc` is dropped, the next `get()` constructs a fresh
/// instance from the initializer expression given to the macro.
///
/// You should not need to name this type directly. Use the macro to declare the singleton and
/// interact with it via the generated constant.
pub struct StaticSingleton<T>
where
    T: Send + Sync + 'static,
{
    /// Returns the `TypeId` of a marker type unique to the declaration, which identifies the slot.
    key_provider: fn() -> TypeId,

    factory: fn() -> T,
}

impl<T> StaticSingleton<T>
where
    T: Send + Sync + 'static,
{
    /// Note: this function exists to serve the inner workings of the `singleton!` macro and
    /// should not be used directly. It is not part of the public API and may be removed or
    /// changed at any time.
    #[doc(hidden)]
    #[must_use]
    pub const fn new(key_provider: fn() -> TypeId, factory: fn() -> T) -> Self {
        Self {
            key_provider,
            factory,
        }
    }

    /// Returns the live instance, constructing it if there is none.
    #[must_use]
    pub fn get(&self) -> Arc<T> {
        let factory = self.factory;

        let Ok(instance): Result<Arc<T>, Infallible> =
            slot::<T>((self.key_provider)()).get_or_try_create(|| Ok(factory()));

        instance
    }

    /// Returns the live instance if there is one, without constructing a new one.
    #[must_use]
    pub fn peek(&self) -> Option<Arc<T>> {
        slot::<T>((self.key_provider)()).peek()
    }
}

impl<T> fmt::Debug for StaticSingleton<T>
where
    T: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("key", &(self.key_provider)())
            .finish_non_exhaustive()
    }
}

/// Declares one or more named singletons whose instance lives only as long as someone holds it.
///
/// The macro generates a constant of type [`StaticSingleton<T>`][crate::StaticSingleton]. The
/// initializer expression is evaluated lazily, each time a new instance needs to be constructed.
/// The expression cannot capture local variables.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct ConnectionPool {
///     max_connections: usize,
/// }
///
/// static POOLS_CREATED: AtomicUsize = AtomicUsize::new(0);
///
/// weak_singleton::singleton! {
///     static POOL: ConnectionPool = {
///         POOLS_CREATED.fetch_add(1, Ordering::Relaxed);
///         ConnectionPool { max_connections: 16 }
///     };
/// }
///
/// let pool = POOL.get();
/// assert_eq!(pool.max_connections, 16);
/// assert!(std::sync::Arc::ptr_eq(&pool, &POOL.get()));
///
/// drop(pool);
/// assert!(POOL.peek().is_none());
///
/// let _pool = POOL.get();
/// assert_eq!(POOLS_CREATED.load(Ordering::Relaxed), 2);
/// ```
///
/// Attributes and visibility are applied to the generated constant:
///
/// ```
/// weak_singleton::singleton! {
///     /// Shared scratch area for the parser.
///     pub static SCRATCH: Vec<u8> = Vec::with_capacity(1024);
///
///     static GREETING: String = "hello".to_string();
/// }
///
/// assert_eq!(*GREETING.get(), "hello");
/// assert!(SCRATCH.get().capacity() >= 1024);
/// ```
#[macro_export]
macro_rules! singleton {
    ($($(#[$attr:meta])* $vis:vis static $NAME:ident: $t:ty = $e:expr);+ $(;)?) => {
        $(
            $crate::__private::paste! {
                // Only the `TypeId` of this marker is ever used: it names the slot of `$NAME`.
                #[doc(hidden)]
                #[expect(non_camel_case_types, reason = "marker named after the constant it keys")]
                enum [<$NAME _singleton_slot>] {}

                $(#[$attr])*
                $vis const $NAME: $crate::StaticSingleton<$t> = $crate::StaticSingleton::new(
                    ::std::any::TypeId::of::<[<$NAME _singleton_slot>]>,
                    || $e,
                );
            }
        )+
    };
}
