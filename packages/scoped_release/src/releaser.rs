use std::ptr::NonNull;

/// A handle type with a value that stands for "no resource".
///
/// Releasers created by [`releaser_for()`] skip the deallocation call for such values, which
/// makes it harmless to guard a handle that failed to allocate or was already given back.
pub trait NullHandle {
    /// Whether this handle is the "no resource" value of its type.
    fn is_null_handle(&self) -> bool;
}

impl<T: ?Sized> NullHandle for *const T {
    #[inline]
    fn is_null_handle(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> NullHandle for *mut T {
    #[inline]
    fn is_null_handle(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> NullHandle for NonNull<T> {
    #[inline]
    fn is_null_handle(&self) -> bool {
        false
    }
}

impl<T> NullHandle for Option<T> {
    #[inline]
    fn is_null_handle(&self) -> bool {
        self.is_none()
    }
}

/// Wraps a single-argument deallocation function into a release action that does nothing for
/// null-equivalent handles.
///
/// Any other handle is passed to `dealloc` exactly once per invocation of the returned action.
///
/// # Example
///
/// ```
/// use scoped_release::{call_at_end_of_scope, releaser_for};
///
/// fn free_buffer(buffer: *mut [u8; 64]) {
///     // SAFETY: Only called with pointers that came from `Box::into_raw()`.
///     drop(unsafe { Box::from_raw(buffer) });
/// }
///
/// let allocated = call_at_end_of_scope(Box::into_raw(Box::new([0_u8; 64])), releaser_for(free_buffer));
/// let missing = call_at_end_of_scope(std::ptr::null_mut(), releaser_for(free_buffer));
///
/// // Both guards drop here; only the allocated buffer is passed to `free_buffer`.
/// # drop((allocated, missing));
/// ```
pub fn releaser_for<T, D>(dealloc: D) -> impl Fn(T)
where
    T: NullHandle,
    D: Fn(T),
{
    move |handle: T| {
        if !handle.is_null_handle() {
            dealloc(handle);
        }
    }
}
