//! Time-to-live caching wrapper.

use std::marker::PhantomData;
use std::time::Duration;

use tokio::time::Instant;

/// Caches the wrapped function's result for a fixed time window.
///
/// A call within `timeout` of the last real execution returns a clone of
/// the cached value; the first call after expiry executes again and
/// refreshes both the value and the timestamp. Expiry is strict: a call
/// landing exactly `timeout` after the last execution is still a cache
/// hit.
///
/// [`clear`](Ttl::clear) forgets the cached result, forcing the next call
/// to execute regardless of elapsed time.
pub struct Ttl<A, R, F>
where
    F: FnMut(A) -> R,
{
    run: F,
    timeout: Duration,
    cached: Option<(R, Instant)>,
    _args: PhantomData<fn(A)>,
}

impl<A, R, F> Ttl<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Wrap `run` with a cache that lives for `timeout` per execution.
    pub fn new(run: F, timeout: Duration) -> Self {
        Self {
            run,
            timeout,
            cached: None,
            _args: PhantomData,
        }
    }

    /// Return the cached result while fresh; execute otherwise.
    pub fn call(&mut self, args: A) -> R {
        if let Some((value, stamp)) = &self.cached {
            if stamp.elapsed() <= self.timeout {
                return value.clone();
            }
        }
        let value = (self.run)(args);
        self.cached = Some((value.clone(), Instant::now()));
        value
    }

    /// Forget the cached result; the next call executes.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Arc<AtomicUsize>, impl FnMut(i32) -> i32) {
        let count = Arc::new(AtomicUsize::new(0));
        let tally = Arc::clone(&count);
        (count, move |n: i32| {
            tally.fetch_add(1, Ordering::SeqCst);
            n
        })
    }

    #[tokio::test(start_paused = true)]
    async fn calls_within_the_window_share_one_execution() {
        let (count, run) = counting();
        let mut ttl = Ttl::new(run, Duration::from_millis(100));

        assert_eq!(ttl.call(1), 1);
        tokio::time::advance(Duration::from_millis(60)).await;
        // Cached: the second call's argument never reaches the function.
        assert_eq!(ttl.call(2), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_triggers_a_fresh_execution() {
        let (count, run) = counting();
        let mut ttl = Ttl::new(run, Duration::from_millis(100));

        assert_eq!(ttl.call(1), 1);
        tokio::time::advance(Duration::from_millis(150)).await;
        assert_eq!(ttl.call(2), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn an_exact_timeout_is_still_a_hit() {
        let (count, run) = counting();
        let mut ttl = Ttl::new(run, Duration::from_millis(100));

        ttl.call(1);
        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(ttl.call(2), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_forces_reexecution_before_expiry() {
        let (count, run) = counting();
        let mut ttl = Ttl::new(run, Duration::from_millis(100));

        ttl.call(1);
        ttl.clear();
        assert_eq!(ttl.call(2), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn the_window_restarts_at_each_real_execution() {
        let (count, run) = counting();
        let mut ttl = Ttl::new(run, Duration::from_millis(100));

        ttl.call(1);
        tokio::time::advance(Duration::from_millis(150)).await;
        ttl.call(2);
        tokio::time::advance(Duration::from_millis(60)).await;
        // Fresh relative to the second execution, not the first.
        assert_eq!(ttl.call(3), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
