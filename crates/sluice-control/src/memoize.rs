//! Keyed memoization wrapper.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Caches the wrapped function's results per derived key.
///
/// Before each call the key extractor reads a cache key out of the
/// arguments; a hit returns a clone of the stored value without
/// executing, a miss executes and stores. Unlike [`Ttl`](crate::Ttl),
/// entries never expire on their own; they leave through
/// [`forget`](Memoize::forget) or [`clear`](Memoize::clear).
pub struct Memoize<K, A, R, KeyFn, F>
where
    K: Eq + Hash,
    KeyFn: FnMut(&A) -> K,
    F: FnMut(A) -> R,
{
    key_fn: KeyFn,
    run: F,
    cache: HashMap<K, R>,
    _args: PhantomData<fn(A)>,
}

impl<K, A, R, KeyFn, F> Memoize<K, A, R, KeyFn, F>
where
    K: Eq + Hash,
    KeyFn: FnMut(&A) -> K,
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Wrap `run`, deriving cache keys with `key_fn`.
    pub fn new(key_fn: KeyFn, run: F) -> Self {
        Self {
            key_fn,
            run,
            cache: HashMap::new(),
            _args: PhantomData,
        }
    }

    /// Execute on a cache miss for the derived key; replay on a hit.
    pub fn call(&mut self, args: A) -> R {
        let key = (self.key_fn)(&args);
        if let Some(value) = self.cache.get(&key) {
            return value.clone();
        }
        let value = (self.run)(args);
        self.cache.insert(key, value.clone());
        value
    }

    /// Evict one key, returning the value it cached, if any.
    pub fn forget(&mut self, key: &K) -> Option<R> {
        self.cache.remove(key)
    }

    /// Store a value for `key` without executing.
    pub fn seed(&mut self, key: K, value: R) {
        self.cache.insert(key, value);
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
