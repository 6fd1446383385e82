//! Execution-Control Wrappers
//!
//! Each wrapper in this crate owns a caller-supplied function and decides,
//! call by call, whether that function actually executes:
//!
//! - [`Singleshot`]: run once, replay the cached result until cleared
//! - [`Singletick`]: run once per burst of calls, reset after a quiet period
//! - [`Ttl`]: run at most once per time window
//! - [`Afterinit`]: swallow the first call, execute all later ones
//! - [`Memoize`]: run once per cache key
//! - [`Cancelable`]: keep only the newest in-flight async call
//! - [`SwapCell`]: a shared cell whose target can be swapped out from
//!   under its users
//!
//! Wrappers take `&mut self`: exclusive access is the synchronization.
//! They are built for a single logical caller (UI event handlers, watch
//! callbacks), and a wrapper shared between tasks needs an external lock,
//! owned by the caller.
//!
//! ## Failure semantics
//!
//! A caching wrapper stores whatever the wrapped function *returns*, and
//! for a `Result` return type that means `Err` values are cached and
//! replayed until cleared. A panic unwinds before the cache is written,
//! leaving the wrapper unarmed so the next call executes again. Nothing
//! is caught: panics and returned errors reach the caller of that
//! invocation.

mod afterinit;
mod cancelable;
mod memoize;
mod singleshot;
mod singletick;
mod swap;
mod ttl;

pub use afterinit::Afterinit;
pub use cancelable::Cancelable;
pub use memoize::Memoize;
pub use singleshot::Singleshot;
pub use singletick::Singletick;
pub use swap::SwapCell;
pub use ttl::Ttl;
