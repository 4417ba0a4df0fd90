//! Example that demonstrates guarding a native-style handle across every exit path.

#![allow(
    missing_docs,
    clippy::must_use_candidate,
    reason = "example code"
)]

use std::sync::atomic::{AtomicUsize, Ordering};

use scoped_release::{call_at_end_of_scope, releaser_for};

static OPEN_HANDLES: AtomicUsize = AtomicUsize::new(0);

// Stand-ins for functions exported by a native library.
fn open_device(name: &str) -> *mut String {
    OPEN_HANDLES.fetch_add(1, Ordering::Relaxed);
    Box::into_raw(Box::new(name.to_string()))
}

fn close_device(device: *mut String) {
    OPEN_HANDLES.fetch_sub(1, Ordering::Relaxed);

    // SAFETY: Only called with pointers returned by `open_device()`.
    drop(unsafe { Box::from_raw(device) });
}

fn describe(name: &str) -> Result<usize, String> {
    let device = call_at_end_of_scope(open_device(name), releaser_for(close_device));

    // SAFETY: The device stays open until the guard drops at the end of this function.
    let device_name = unsafe { &**device };

    if device_name.is_empty() {
        return Err("unnamed device".to_string());
    }

    Ok(device_name.len())
}

fn main() {
    println!("=== scoped_release README Example ===");

    assert_eq!(describe("audio0"), Ok(6));
    assert_eq!(describe(""), Err("unnamed device".to_string()));

    // Both the successful and the failing call closed their device.
    assert_eq!(OPEN_HANDLES.load(Ordering::Relaxed), 0);

    println!("README example completed successfully!");
}
