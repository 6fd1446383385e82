//! Burst-scoped run-once wrapper.

use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use crate::singleshot::Singleshot;

/// A [`Singleshot`] scoped to a burst of calls.
///
/// Calls closer together than the inactivity window share one execution,
/// exactly like [`Singleshot`]; once the wrapper sits idle longer than
/// the window, the cached result is dropped and the next call starts a
/// new burst. Useful for side effects that should fire once per flurry of
/// UI events without any manual cache invalidation.
///
/// Expiry is checked on the way into each call rather than by a timer
/// task; an expired cache is simply never read, so the observable
/// behavior is the same.
pub struct Singletick<A, R, F>
where
    F: FnMut(A) -> R,
{
    inner: Singleshot<A, R, F>,
    window: Duration,
    last_call: Option<Instant>,
}

impl<A, R, F> Singletick<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Wrap `run`; `window` is the idle time after which the next call
    /// executes again.
    pub fn new(run: F, window: Duration) -> Self {
        Self {
            inner: Singleshot::new(run),
            window,
            last_call: None,
        }
    }

    /// Execute on the first call of a burst; replay within the burst.
    pub fn call(&mut self, args: A) -> R {
        let now = Instant::now();
        if let Some(last) = self.last_call {
            if now.duration_since(last) > self.window && self.inner.has_run() {
                trace!("idle window elapsed, dropping cached result");
                self.inner.clear();
            }
        }
        self.last_call = Some(now);
        self.inner.call(args)
    }

    /// End the burst by hand; the next call executes again.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.last_call = None;
    }
}
