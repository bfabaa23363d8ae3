//! Grammar error types.

use thiserror::Error;

/// Errors that can occur while building or querying a grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The definition set has no root rule.
    #[error("grammar does not define a '{root}' rule")]
    MissingRoot { root: String },

    /// A reference names a fragment absent from the definition set.
    #[error("'{name}' is not a defined grammar rule")]
    UnknownFragment { name: String },

    /// A definition supplies no usable rule text or pattern source.
    #[error("'{name}' is not a recognized grammar definition")]
    InvalidDefinition { name: String },

    /// A reference chain recursed past the depth bound. The input most
    /// likely has a cyclic definition.
    #[error("exceeded maximum recursion depth ({depth}); input may have a cyclic definition")]
    RecursionLimit { depth: usize },

    /// The engine rejected the fully composed pattern text.
    #[error("composed pattern for '{name}' is malformed: {message}")]
    MalformedPattern { name: String, message: String },
}

impl GrammarError {
    pub fn missing_root(root: impl Into<String>) -> Self {
        Self::MissingRoot { root: root.into() }
    }

    pub fn unknown_fragment(name: impl Into<String>) -> Self {
        Self::UnknownFragment { name: name.into() }
    }

    pub fn invalid_definition(name: impl Into<String>) -> Self {
        Self::InvalidDefinition { name: name.into() }
    }

    pub fn recursion_limit(depth: usize) -> Self {
        Self::RecursionLimit { depth }
    }

    pub fn malformed_pattern(name: impl Into<String>, err: regex_lite::Error) -> Self {
        Self::MalformedPattern {
            name: name.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;
