//! The public grammar API.

use std::collections::HashMap;
use std::sync::Arc;

use regex_lite::Regex;

use crate::composer::Composer;
use crate::store::FragmentStore;
use crate::{CompiledPattern, Fragment, GrammarError, GrammarResult, MatchResult, ROOT_RULE};

/// A compiled grammar over a set of named fragment definitions.
///
/// Construction validates that the set defines a [`ROOT_RULE`] fragment and
/// eagerly composes it, which transitively composes everything the root
/// references. Fragments the root never reaches are composed on first use.
/// The instance is immutable after construction and safe to share across
/// threads.
#[derive(Debug)]
pub struct Grammar {
    store: FragmentStore,
    root: Arc<CompiledPattern>,
}

impl Grammar {
    /// Build a grammar from `(name, definition)` pairs.
    ///
    /// Plain strings are rule text; pass a [`Fragment::Pattern`] (or a
    /// pre-built [`Regex`]) for verbatim sources the whitespace normalizer
    /// must not touch. Later entries win when a name repeats.
    pub fn new<I, K, F>(definitions: I) -> GrammarResult<Self>
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: Into<Fragment>,
    {
        let definitions: HashMap<String, Fragment> = definitions
            .into_iter()
            .map(|(name, fragment)| (name.into(), fragment.into()))
            .collect();
        let store = FragmentStore::new(definitions);
        if !store.contains(ROOT_RULE) {
            return Err(GrammarError::missing_root(ROOT_RULE));
        }

        let root = Composer::new(&store).compose(ROOT_RULE, 0)?;
        Ok(Self { store, root })
    }

    /// Find the first match of the root rule in `text`.
    ///
    /// The search is unanchored; `None` means no match, which is a normal
    /// result rather than an error.
    pub fn find(&self, text: &str) -> Option<MatchResult> {
        self.root.find(text)
    }

    /// Find the first match of the named rule in `text`, composing the
    /// rule on demand if construction never reached it.
    pub fn find_rule(&self, text: &str, name: &str) -> GrammarResult<Option<MatchResult>> {
        Ok(self.compiled(name)?.find(text))
    }

    /// Whether `text` contains a match of the root rule.
    pub fn matches(&self, text: &str) -> bool {
        self.root.is_match(text)
    }

    /// The finished composite pattern for a rule, composing on demand.
    ///
    /// Lets grammar authors exercise a sub-rule in isolation even when the
    /// root never references it.
    pub fn compiled(&self, name: &str) -> GrammarResult<Arc<CompiledPattern>> {
        match self.store.get_compiled(name) {
            Some(pattern) => Ok(pattern),
            None => Composer::new(&self.store).compose(name, 0),
        }
    }

    /// The compiled root pattern.
    pub fn root(&self) -> &CompiledPattern {
        &self.root
    }

    /// The built top-level regex.
    pub fn regex(&self) -> &Regex {
        self.root.regex()
    }
}
