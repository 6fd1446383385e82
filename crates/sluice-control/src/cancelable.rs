//! In-flight supersession wrapper.

use std::future::Future;
use std::marker::PhantomData;

use tokio::sync::oneshot;
use tracing::debug;

/// Keeps only the newest in-flight call.
///
/// Each call starts the wrapped future and hands back a future resolving
/// `Some(output)`, unless a newer call or an explicit
/// [`cancel`](Cancelable::cancel) supersedes it first, in which case it
/// resolves `None`. The superseded future is dropped, so the underlying
/// work is actually torn down rather than left running with its result
/// ignored.
///
/// Typical use: a search-as-you-type fetch where only the latest
/// keystroke's request should ever land.
pub struct Cancelable<A, T, F, Fut>
where
    F: FnMut(A) -> Fut,
    Fut: Future<Output = T>,
{
    run: F,
    supersede: Option<oneshot::Sender<()>>,
    _args: PhantomData<fn(A) -> (Fut, T)>,
}

impl<A, T, F, Fut> Cancelable<A, T, F, Fut>
where
    F: FnMut(A) -> Fut,
    Fut: Future<Output = T>,
{
    /// Wrap `run` with nothing in flight.
    pub fn new(run: F) -> Self {
        Self {
            run,
            supersede: None,
            _args: PhantomData,
        }
    }

    /// Start a call, superseding any call still in flight.
    ///
    /// The wrapped function runs eagerly to build its future; the returned
    /// future does not borrow the wrapper, so several calls' results can
    /// be awaited side by side, with all but the newest resolving `None`.
    pub fn call(&mut self, args: A) -> impl Future<Output = Option<T>> {
        if let Some(prior) = self.supersede.take() {
            debug!("superseding in-flight call");
            let _ = prior.send(());
        }
        let (tx, rx) = oneshot::channel();
        self.supersede = Some(tx);
        let work = (self.run)(args);

        async move {
            tokio::select! {
                value = work => Some(value),
                Ok(()) = rx => None,
            }
        }
    }

    /// Supersede the in-flight call, if any, without starting a new one.
    pub fn cancel(&mut self) {
        if let Some(prior) = self.supersede.take() {
            debug!("canceling in-flight call");
            let _ = prior.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn an_unchallenged_call_completes() {
        let mut wrapper = Cancelable::new(|n: u64| async move {
            sleep(Duration::from_millis(n)).await;
            n
        });
        assert_eq!(wrapper.call(5).await, Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_call_supersedes_the_older_one() {
        let mut wrapper = Cancelable::new(|n: u64| async move {
            sleep(Duration::from_millis(n)).await;
            n
        });

        let slow = wrapper.call(500);
        let fast = wrapper.call(10);
        let (slow, fast) = tokio::join!(slow, fast);
        assert_eq!(slow, None);
        assert_eq!(fast, Some(10));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_supersedes_without_replacement() {
        let mut wrapper = Cancelable::new(|n: u64| async move {
            sleep(Duration::from_millis(n)).await;
            n
        });

        let pending = wrapper.call(500);
        wrapper.cancel();
        assert_eq!(pending.await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_with_nothing_in_flight_is_a_no_op() {
        let mut wrapper = Cancelable::new(|n: u64| async move { n });
        wrapper.cancel();
        assert_eq!(wrapper.call(1).await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_work_is_torn_down() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        struct DropFlag(Arc<AtomicBool>);
        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let dropped = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dropped);
        let mut wrapper = Cancelable::new(move |n: u64| {
            let guard = DropFlag(Arc::clone(&flag));
            async move {
                let _guard = guard;
                sleep(Duration::from_millis(n)).await;
                n
            }
        });

        let slow = wrapper.call(500);
        let fast = wrapper.call(10);
        assert_eq!(slow.await, None);
        // The fast call has not even been polled yet, so the flag can only
        // have come from the superseded future being dropped.
        assert!(dropped.load(Ordering::SeqCst));
        assert_eq!(fast.await, Some(10));
    }
}
