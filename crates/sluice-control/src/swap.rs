//! Swappable indirection cell.

use std::sync::Arc;

use parking_lot::RwLock;

/// A cloneable handle to a shared target that can be swapped out from
/// under its users.
///
/// All clones point at the same slot: a [`set`](SwapCell::set) through any
/// handle is observed by every other handle on its next read. This is the
/// explicit form of "redirect everyone to a new implementation": an
/// indirection cell callers read through, rather than anything mutated
/// behind their backs.
pub struct SwapCell<T> {
    target: Arc<RwLock<T>>,
}

impl<T> SwapCell<T> {
    /// Create a cell pointing at `target`.
    pub fn new(target: T) -> Self {
        Self {
            target: Arc::new(RwLock::new(target)),
        }
    }

    /// Swap in a new target.
    pub fn set(&self, target: T) {
        *self.target.write() = target;
    }

    /// Swap in a new target, returning the previous one.
    pub fn replace(&self, target: T) -> T {
        std::mem::replace(&mut *self.target.write(), target)
    }

    /// Run `view` against the current target.
    pub fn with<R>(&self, view: impl FnOnce(&T) -> R) -> R {
        view(&self.target.read())
    }
}

impl<T: Clone> SwapCell<T> {
    /// Clone of the current target.
    pub fn get(&self) -> T {
        self.target.read().clone()
    }
}

impl<T> Clone for SwapCell<T> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
        }
    }
}
