use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use scopeguard::{Always, ScopeGuard};

/// Owns a resource handle together with the obligation to release it.
///
/// The release action receives the handle by value and runs exactly once, when the guard is
/// dropped. Dropping happens on every path out of the owning scope, including early returns,
/// `?` propagation and panics unwinding through the scope.
///
/// The guard is neither `Clone` nor `Copy` because it represents sole responsibility for a single
/// release. Moving the guard moves that responsibility: the new owner releases, the old binding
/// does not.
///
/// Create guards with [`call_at_end_of_scope()`] or [`ScopedRelease::new()`].
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
///
/// use scoped_release::ScopedRelease;
///
/// let log = RefCell::new(Vec::new());
///
/// {
///     let _outer = ScopedRelease::new("outer", |name| log.borrow_mut().push(name));
///     let _inner = ScopedRelease::new("inner", |name| log.borrow_mut().push(name));
/// }
///
/// assert_eq!(*log.borrow(), ["inner", "outer"]);
/// ```
#[must_use = "the release action runs as soon as the guard is dropped"]
pub struct ScopedRelease<T, F>
where
    F: FnOnce(T),
{
    // The release action must fire on every exit path, unwinding included.
    inner: ScopeGuard<T, F, Always>,
}

impl<T, F> ScopedRelease<T, F>
where
    F: FnOnce(T),
{
    /// Binds `handle` to `release`, which will be called with the handle when the guard drops.
    pub fn new(handle: T, release: F) -> Self {
        Self {
            inner: scopeguard::guard(handle, release),
        }
    }

    /// Borrows the guarded handle.
    #[must_use]
    #[inline]
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Mutably borrows the guarded handle.
    ///
    /// Whatever value the handle holds when the guard drops is what the release action receives.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T, F> Deref for ScopedRelease<T, F>
where
    F: FnOnce(T),
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, F> DerefMut for ScopedRelease<T, F>
where
    F: FnOnce(T),
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, F> Debug for ScopedRelease<T, F>
where
    T: Debug,
    F: FnOnce(T),
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedRelease")
            .field("handle", self.get())
            .finish_non_exhaustive()
    }
}

/// Binds `handle` to `release` for the rest of the current scope.
///
/// The returned guard must be kept in a named binding; `let _ = ...` drops it, and thereby
/// releases the handle, immediately.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// use scoped_release::call_at_end_of_scope;
///
/// static CLOSED: AtomicBool = AtomicBool::new(false);
///
/// fn read_header(descriptor: i32) -> Result<u8, &'static str> {
///     let descriptor = call_at_end_of_scope(descriptor, |_| CLOSED.store(true, Ordering::Relaxed));
///
///     if *descriptor < 0 {
///         return Err("invalid descriptor");
///     }
///
///     Ok(42)
/// }
///
/// assert!(read_header(-1).is_err());
/// assert!(CLOSED.load(Ordering::Relaxed));
/// ```
pub fn call_at_end_of_scope<T, F>(handle: T, release: F) -> ScopedRelease<T, F>
where
    F: FnOnce(T),
{
    ScopedRelease::new(handle, release)
}
