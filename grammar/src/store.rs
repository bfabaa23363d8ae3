//! The Fragment Store - definition lookup and compiled-pattern memoization.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{CompiledPattern, Fragment, GrammarError, GrammarResult};

/// Owns the raw definition map and the memoized compiled-pattern map.
///
/// Definitions are immutable after construction. Compiled patterns are
/// created lazily by the composer and cached here for the lifetime of the
/// grammar; there is no invalidation path. The cache sits behind a
/// read-mostly lock so one grammar instance can be shared across threads;
/// concurrent first-time compilation of the same fragment is a benign race
/// (composition is deterministic, so both writers store identical values
/// and last write wins).
#[derive(Debug)]
pub(crate) struct FragmentStore {
    /// Fragment definitions by name.
    definitions: HashMap<String, Fragment>,
    /// Compiled composite patterns by name.
    compiled: RwLock<HashMap<String, Arc<CompiledPattern>>>,
}

impl FragmentStore {
    /// Create a store over the given definition set.
    pub(crate) fn new(definitions: HashMap<String, Fragment>) -> Self {
        Self {
            definitions,
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Whether a fragment is defined.
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Get a fragment's raw definition.
    pub(crate) fn get_definition(&self, name: &str) -> GrammarResult<&Fragment> {
        self.definitions
            .get(name)
            .ok_or_else(|| GrammarError::unknown_fragment(name))
    }

    /// Get a fragment's compiled pattern, if already compiled.
    pub(crate) fn get_compiled(&self, name: &str) -> Option<Arc<CompiledPattern>> {
        // The cache only ever holds fully-constructed immutable values, so a
        // poisoned lock still guards consistent data.
        self.compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Arc::clone)
    }

    /// Memoize a compiled pattern. Idempotent; last write wins.
    pub(crate) fn put_compiled(&self, name: &str, pattern: Arc<CompiledPattern>) {
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), pattern);
    }
}
