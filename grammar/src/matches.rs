//! Structured match results.

use std::collections::HashMap;

use regex_lite::Captures;

/// The outcome of a successful match: the full matched substring, its byte
/// span in the haystack, and the substring captured by every participating
/// named group.
///
/// Group names are the fully-qualified names produced by composition
/// (`TOP_domain`, `TOP_proto_protocol`, ...). A group that did not take
/// part in the match is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    matched: String,
    start: usize,
    end: usize,
    groups: HashMap<String, String>,
}

impl MatchResult {
    pub(crate) fn from_captures(caps: &Captures<'_>, names: &[String]) -> Self {
        let (matched, start, end) = match caps.get(0) {
            Some(whole) => (whole.as_str().to_string(), whole.start(), whole.end()),
            None => (String::new(), 0, 0),
        };
        let groups = names
            .iter()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Self {
            matched,
            start,
            end,
            groups,
        }
    }

    /// The full matched substring.
    pub fn as_str(&self) -> &str {
        &self.matched
    }

    /// Byte offset where the match starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the end of the match.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The substring captured by a named group, if it participated.
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    /// Iterate over all participating `(group name, capture)` pairs.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .map(|(name, capture)| (name.as_str(), capture.as_str()))
    }

    /// Number of participating named groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
