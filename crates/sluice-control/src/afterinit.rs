//! First-call suppression wrapper.

use std::marker::PhantomData;

/// Swallows exactly one call, then passes every later call through.
///
/// The first call returns `None` without executing the wrapped function;
/// every call after that executes it and returns `Some`, uncached, every
/// time. The intended use is skipping a setup invocation, e.g. a reactive
/// callback that fires immediately on subscription before any real change
/// has happened.
///
/// [`clear`](Afterinit::clear) re-arms the swallow for the next call.
pub struct Afterinit<A, R, F>
where
    F: FnMut(A) -> R,
{
    run: F,
    primed: bool,
    _args: PhantomData<fn(A) -> R>,
}

impl<A, R, F> Afterinit<A, R, F>
where
    F: FnMut(A) -> R,
{
    /// Wrap `run` with the first call armed to be swallowed.
    pub fn new(run: F) -> Self {
        Self {
            run,
            primed: false,
            _args: PhantomData,
        }
    }

    /// Swallow the first call; execute all later ones.
    pub fn call(&mut self, args: A) -> Option<R> {
        if !self.primed {
            self.primed = true;
            return None;
        }
        Some((self.run)(args))
    }

    /// Arm the swallow again: the next call is dropped.
    pub fn clear(&mut self) {
        self.primed = false;
    }
}
