//! Compiled composite patterns.

use regex_lite::Regex;

use crate::{GrammarError, GrammarResult, MatchResult};

/// The finished composite pattern for one fragment: the fully composed
/// source text, the engine-compiled regex, and the capture-group names the
/// composition produced. Immutable once created; shared by every later
/// reference to the owning fragment.
#[derive(Debug)]
pub struct CompiledPattern {
    /// Name of the fragment this pattern was composed for.
    name: String,
    /// The compiled composite regex.
    regex: Regex,
    /// Capture-group names, in order of appearance.
    groups: Vec<String>,
}

impl CompiledPattern {
    /// Compile the composed source text for a fragment.
    pub(crate) fn new(name: &str, source: String) -> GrammarResult<Self> {
        let regex =
            Regex::new(&source).map_err(|e| GrammarError::malformed_pattern(name, e))?;
        let groups = regex
            .capture_names()
            .flatten()
            .map(String::from)
            .collect();
        Ok(Self {
            name: name.to_string(),
            regex,
            groups,
        })
    }

    /// Name of the fragment this pattern belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The composed pattern source text.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// The engine-compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Capture-group names, in order of appearance in the source.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Find the first match in `text`, unanchored.
    ///
    /// `None` is the normal no-match result, not an error.
    pub fn find(&self, text: &str) -> Option<MatchResult> {
        self.regex
            .captures(text)
            .map(|caps| MatchResult::from_captures(&caps, &self.groups))
    }

    /// Whether `text` contains a match at all.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
