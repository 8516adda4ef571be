//! Structural-key memoization for pure-ish callables.
//!
//! [`Memo`] wraps a callable and caches its results keyed on a deep
//! structural serialization of the arguments (via `bincode`), so two calls
//! with value-equal arguments hit the same entry regardless of where the
//! values came from. Positional order matters: `(1, 2)` and `(2, 1)` are
//! distinct keys. For named arguments, use a `BTreeMap`: its canonical key
//! ordering makes insertion order irrelevant.
//!
//! Limitation: argument types whose `Serialize` output is nondeterministic
//! (notably `HashMap`, whose iteration order varies per instance) produce
//! inconsistent keys and defeat the cache. Use order-canonical types.
//!
//! The cache is unbounded and lives as long as the `Memo` value. There is no
//! eviction, no TTL, and no invalidation API. Not synchronized: `call` takes
//! `&mut self` and the type is meant for single-threaded use.

use crate::error::MemoError;
use serde::Serialize;
use std::collections::HashMap;

/// A memoizing wrapper around a callable.
pub struct Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: FnMut(&A) -> R,
{
    func: F,
    cache: HashMap<Vec<u8>, R>,
    _args: std::marker::PhantomData<A>,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: FnMut(&A) -> R,
{
    /// Wrap a callable with an empty cache.
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: HashMap::new(),
            _args: std::marker::PhantomData,
        }
    }

    /// Invoke the wrapped callable, or return the cached result for
    /// structurally-equal arguments.
    ///
    /// Fails only when the arguments cannot be serialized into a key.
    pub fn call(&mut self, args: &A) -> Result<R, MemoError> {
        let key = bincode::serialize(args)?;

        if let Some(value) = self.cache.get(&key) {
            return Ok(value.clone());
        }

        let value = (self.func)(args);
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Convenience constructor, mirroring decorator-style usage.
pub fn memoize<A, R, F>(func: F) -> Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: FnMut(&A) -> R,
{
    Memo::new(func)
}
