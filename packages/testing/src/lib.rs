#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing and examples in Folo packages.

use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, mpsc};
use std::thread;
use std::time::Duration;

/// Runs a test with a timeout to prevent infinite hangs.
///
/// This function wraps a test closure with a timeout mechanism. If the test
/// takes longer than the timeout to complete, the test panics instead of
/// keeping CI/build systems waiting forever (e.g. on a deadlocked lock).
///
/// The timeout is 10 seconds under normal conditions and 60 seconds under
/// Miri, where thread synchronization primitives are significantly slower.
///
/// When the `MUTATION_TESTING` environment variable is set to "1", the watchdog
/// is disabled and the test function is executed directly. This allows mutation
/// testing to properly detect hanging mutations.
///
/// # Panics
///
/// Panics if the test exceeds the timeout (when not in mutation testing mode).
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// with_watchdog(|| {
///     // Your test code here
///     assert_eq!(2 + 2, 4);
/// });
/// ```
#[cfg_attr(test, mutants::skip)] // Test plumbing, do not waste time mutating.
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if std::env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        return test_fn();
    }

    let (tx, rx) = mpsc::channel();

    let test_handle = thread::spawn(move || {
        let result = test_fn();
        // If this fails, the receiver has already timed out.
        drop(tx.send(result));
    });

    let timeout = if cfg!(miri) {
        Duration::from_secs(60)
    } else {
        Duration::from_secs(10)
    };

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            test_handle.join().expect("Test thread should not panic");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("Test exceeded {timeout:?} timeout");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            // The thread panicked before sending, so surface that panic.
            match test_handle.join() {
                Ok(()) => panic!("Test thread disconnected unexpectedly"),
                Err(e) => std::panic::resume_unwind(e),
            }
        }
    }
}

/// Counts how many times something was invoked, from any number of threads.
///
/// Clones share the same count.
///
/// # Example
///
/// ```rust
/// use testing::CallCounter;
///
/// let counter = CallCounter::new();
/// let observer = counter.observer();
///
/// observer("first");
/// observer("second");
///
/// assert_eq!(counter.count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter that starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count by one.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// The number of increments so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Returns a callback that increments this counter and ignores its argument.
    ///
    /// Suitable as a release action or any other single-argument callback under test.
    #[must_use]
    pub fn observer<T>(&self) -> impl Fn(T) + Send + Sync + use<T> {
        let count = Arc::clone(&self.count);

        move |_: T| {
            count.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Records values in the order they are handed to its release callbacks.
///
/// Clones share the same log.
///
/// # Example
///
/// ```rust
/// use testing::ReleaseLog;
///
/// let log = ReleaseLog::new();
///
/// let release = log.releaser();
/// release("b");
/// release("a");
///
/// assert_eq!(log.entries(), ["b", "a"]);
/// ```
pub struct ReleaseLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> ReleaseLog<T> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a value to the log.
    pub fn record(&self, value: T) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Returns a callback that appends its argument to this log.
    #[must_use]
    pub fn releaser(&self) -> impl Fn(T) + use<T> {
        let entries = Arc::clone(&self.entries);

        move |value: T| {
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value);
        }
    }

    /// The number of values recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ReleaseLog<T>
where
    T: Clone,
{
    /// A snapshot of the recorded values, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<T> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Clone for ReleaseLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for ReleaseLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ReleaseLog<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseLog")
            .field("entries", &self.entries)
            .finish()
    }
}
