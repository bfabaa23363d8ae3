//! Text-format grammar intake.
//!
//! A grammar listing is one definition per line, `name: body`. A body
//! wrapped in slashes (`/.../`) is a verbatim pattern; anything else is
//! whitespace-normalized rule text. Blank lines and `#` comments are
//! skipped. This is deliberately just line splitting - composition treats
//! the bodies as opaque text, exactly like definitions supplied in code.

use crate::{Fragment, Grammar, GrammarError, GrammarResult};

impl Grammar {
    /// Build a grammar from a text listing.
    ///
    /// ```text
    /// # a tiny greeting grammar
    /// TOP:      $GREETING $WORD
    /// GREETING: hello|goodbye
    /// WORD:     /\w+/
    /// ```
    pub fn parse(source: &str) -> GrammarResult<Self> {
        Grammar::new(parse_definitions(source)?)
    }
}

/// Parse a grammar listing into `(name, definition)` pairs.
///
/// A line without a `:` separator, a name that is not a reference-token
/// identifier, an empty body, or trailing characters after a pattern's
/// closing slash are all rejected as [`GrammarError::InvalidDefinition`] -
/// there is no usable rule text or pattern source to fall back to.
pub fn parse_definitions(source: &str) -> GrammarResult<Vec<(String, Fragment)>> {
    let mut definitions = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, body)) = line.split_once(':') else {
            return Err(GrammarError::invalid_definition(line));
        };
        let name = name.trim();
        let body = body.trim();
        if !is_identifier(name) || body.is_empty() {
            return Err(GrammarError::invalid_definition(name));
        }
        definitions.push((name.to_string(), parse_body(name, body)?));
    }
    Ok(definitions)
}

fn parse_body(name: &str, body: &str) -> GrammarResult<Fragment> {
    let Some(rest) = body.strip_prefix('/') else {
        return Ok(Fragment::rule(body));
    };
    match rest.rfind('/') {
        Some(end) if rest[end + 1..].is_empty() => Ok(Fragment::pattern(&rest[..end])),
        _ => Err(GrammarError::invalid_definition(name)),
    }
}

/// Whether a name matches the reference-token identifier syntax (`\w+`).
fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
