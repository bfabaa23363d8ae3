//! Loader for grammar listing files.

use std::fs;
use std::path::{Path, PathBuf};

use braid_grammar::Grammar;

use crate::error::{HarnessError, HarnessResult};

/// Resolve a grammar file name against the harness data directory.
pub fn grammar_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("grammars")
        .join(name)
}

/// Load and compile a grammar listing from the data directory.
pub fn load_grammar(name: &str) -> HarnessResult<Grammar> {
    let path = grammar_path(name);
    let source =
        fs::read_to_string(&path).map_err(|e| HarnessError::file_read(&path, e))?;
    Grammar::parse(&source).map_err(|e| HarnessError::grammar_compile(&path, e))
}
