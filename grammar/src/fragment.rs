//! Fragment definitions supplied by the grammar author.

use regex_lite::Regex;

/// A single named fragment definition.
///
/// Rule text is meant to be written for humans: every run of whitespace in
/// it compiles to "zero or more whitespace characters", so spaced-out rules
/// stay readable without forcing literal spaces on the input. A fragment
/// that needs a literal space (or any other text the normalizer would
/// touch) must be supplied as a pattern instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Human-readable rule text, whitespace-normalized when compiled.
    Rule(String),
    /// Verbatim pattern source, embedded exactly as written.
    Pattern(String),
}

impl Fragment {
    /// Create a rule-text fragment.
    pub fn rule(text: impl Into<String>) -> Self {
        Fragment::Rule(text.into())
    }

    /// Create a verbatim pattern fragment.
    pub fn pattern(source: impl Into<String>) -> Self {
        Fragment::Pattern(source.into())
    }

    /// Get the raw rule text if this is a rule fragment.
    pub fn as_rule(&self) -> Option<&str> {
        match self {
            Fragment::Rule(text) => Some(text),
            _ => None,
        }
    }

    /// Get the raw pattern source if this is a pattern fragment.
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Fragment::Pattern(source) => Some(source),
            _ => None,
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Rule(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Rule(text)
    }
}

/// A pre-built regex contributes its source text only; the composer embeds
/// it verbatim, so flags set on the original object are not consulted.
impl From<&Regex> for Fragment {
    fn from(regex: &Regex) -> Self {
        Fragment::Pattern(regex.as_str().to_string())
    }
}

impl From<Regex> for Fragment {
    fn from(regex: Regex) -> Self {
        Fragment::from(&regex)
    }
}
