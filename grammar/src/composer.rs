//! The composer - recursive compilation of fragment references.
//!
//! Composition is two explicit passes over a fragment's source text:
//! reference substitution (every `$name` token becomes a provisionally
//! named capturing group wrapping the referenced fragment's compiled
//! source) and group uniquification (every named group is prefixed with
//! the owning fragment's name and deduplicated with numeric suffixes).
//! Keeping the passes separate keeps their invariants - fully resolved
//! references, globally unique names - independently checkable.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::{CompiledPattern, Fragment, GrammarError, GrammarResult};
use crate::store::FragmentStore;

/// Reference chains deeper than this are rejected. Exceeding it is a
/// likely indicator of a cyclic definition, or a significantly
/// over-complicated grammar.
pub(crate) const MAX_DEPTH: usize = 1024;

/// A run of whitespace in rule text.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A reference token: marker character followed by an identifier.
static REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\w+)").unwrap());

/// The opening of a named capturing group, in either spelling.
static GROUP_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\?P?<([A-Za-z_][0-9A-Za-z_]*)>").unwrap());

/// Recursive compiler over a fragment store.
pub(crate) struct Composer<'s> {
    store: &'s FragmentStore,
}

impl<'s> Composer<'s> {
    /// Create a composer over the given store.
    pub(crate) fn new(store: &'s FragmentStore) -> Self {
        Self { store }
    }

    /// Compose the named fragment at the given recursion depth, compiling
    /// any referenced fragment that is not yet cached.
    pub(crate) fn compose(
        &self,
        name: &str,
        depth: usize,
    ) -> GrammarResult<Arc<CompiledPattern>> {
        if depth > MAX_DEPTH {
            return Err(GrammarError::recursion_limit(MAX_DEPTH));
        }

        let source = match self.store.get_definition(name)? {
            Fragment::Rule(text) => normalize_whitespace(text),
            Fragment::Pattern(source) => source.clone(),
        };

        let resolved = self.resolve_references(&source, depth)?;
        let renamed = uniquify_groups(name, &resolved);

        let compiled = Arc::new(CompiledPattern::new(name, renamed)?);
        self.store.put_compiled(name, Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Replace every `$name` token with a provisionally named capturing
    /// group wrapping the referenced fragment's compiled source, building
    /// referenced fragments on demand at `depth + 1`.
    ///
    /// The rewrite is a manual span splice rather than `replace_all`: the
    /// recursive compilation of a child is fallible, and its error has to
    /// propagate out of the scan.
    fn resolve_references(&self, source: &str, depth: usize) -> GrammarResult<String> {
        let mut out = String::with_capacity(source.len());
        let mut last = 0;
        for caps in REFERENCE.captures_iter(source) {
            let (Some(token), Some(ident)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let child = ident.as_str();
            let pattern = match self.store.get_compiled(child) {
                Some(pattern) => pattern,
                None => self.compose(child, depth + 1)?,
            };
            out.push_str(&source[last..token.start()]);
            out.push_str("(?<");
            out.push_str(child);
            out.push('>');
            out.push_str(pattern.source());
            out.push(')');
            last = token.end();
        }
        out.push_str(&source[last..]);
        Ok(out)
    }
}

/// Collapse every whitespace run in rule text into "zero or more
/// whitespace", so spaced-out human-readable rules do not demand literal
/// spaces from the input.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, r"\s*").into_owned()
}

/// Rename every named capturing group in `source` so the result is unique
/// within this compilation: strip any inherited duplicate suffix, prefix
/// with the owning fragment's name, and number repeats of the same base
/// name in order of appearance (bare name first, then `_1`, `_2`, ...).
pub(crate) fn uniquify_groups(owner: &str, source: &str) -> String {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for caps in GROUP_OPEN.captures_iter(source) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let base = format!("{}_{}", owner, strip_duplicate_suffix(name.as_str()));
        let count = seen.entry(base.clone()).or_insert(0);
        out.push_str(&source[last..token.start()]);
        out.push_str("(?<");
        out.push_str(&base);
        if *count > 0 {
            out.push('_');
            out.push_str(&count.to_string());
        }
        out.push('>');
        *count += 1;
        last = token.end();
    }
    out.push_str(&source[last..]);
    out
}

/// Strip one `_<digits>` duplicate suffix from a group name, or one
/// trailing separator. Digits that belong to the name itself (`BASE64`)
/// stay put; only a numbered duplicate produced by an earlier compilation
/// (`UUID_INT_1`) loses its counter, so the owning compilation renumbers
/// every occurrence from scratch.
fn strip_duplicate_suffix(name: &str) -> &str {
    let trimmed = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.len() < name.len() {
        return match trimmed.strip_suffix('_') {
            Some(base) => base,
            None => name,
        };
    }
    match name.strip_suffix('_') {
        Some(base) => base,
        None => name,
    }
}
