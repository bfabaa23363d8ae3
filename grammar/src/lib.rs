//! Braid Grammar
//!
//! Compile named, mutually-referencing pattern fragments into one composite
//! regular expression with uniquely-named capture groups.
//!
//! Responsibilities:
//! - Store fragment definitions and memoize their compiled patterns
//! - Resolve `$name` references recursively, guarding recursion depth
//! - Wrap each reference in a capturing group and uniquify group names
//! - Match text against the root rule or any sub-rule, compiling on demand
//!
//! ```
//! use braid_grammar::{Fragment, Grammar};
//!
//! let grammar = Grammar::new([
//!     ("TOP", Fragment::rule("$ADJECTIVE $WORD")),
//!     ("ADJECTIVE", Fragment::pattern("good|bad")),
//!     ("WORD", Fragment::pattern(r"\w+")),
//! ])
//! .unwrap();
//!
//! let result = grammar.find("good  dog").unwrap();
//! assert_eq!(result.group("TOP_ADJECTIVE"), Some("good"));
//! assert_eq!(result.group("TOP_WORD"), Some("dog"));
//! ```

mod composer;
mod error;
mod fragment;
mod grammar;
mod matches;
mod pattern;
mod source;
mod store;

pub use error::{GrammarError, GrammarResult};
pub use fragment::Fragment;
pub use grammar::Grammar;
pub use matches::MatchResult;
pub use pattern::CompiledPattern;
pub use source::parse_definitions;

/// Name of the mandatory root fragment every definition set must provide.
pub const ROOT_RULE: &str = "TOP";
