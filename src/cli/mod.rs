//! CLI support for tokpatch
//!
//! Provides programmatic access to the tokpatch commands so they can be
//! driven from other tools and from tests.

mod apply;
mod check;
mod docs;
mod tokens;

pub use apply::{ApplyOptions, ApplyResult, Source, execute_apply};
pub use check::{CheckResult, RuleOutline, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use tokens::execute_tokens;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::ParseError;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// No `--patch` argument
    #[error("no rule file specified. Use --patch <FILE>.")]
    NoRuleFile,

    /// No `--in` argument and nothing piped to stdin
    #[error("no input file specified. Use --in <FILE> or pipe source to stdin.")]
    NoInput,

    /// The rule file does not parse
    #[error("{}: {source}", path.display())]
    RuleFile { path: PathBuf, source: ParseError },

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'tokpatch docs' to see available categories.")]
    UnknownCategory(String),
}

fn read_file(path: &std::path::Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_rules(path: &std::path::Path) -> Result<Vec<crate::Rule>, CliError> {
    let text = read_file(path)?;
    crate::parse_rules(&text).map_err(|source| CliError::RuleFile {
        path: path.to_path_buf(),
        source,
    })
}
