//! Apply a rule file to a source file

use std::path::PathBuf;

use tracing::info;

use super::{CliError, load_rules, read_file};
use crate::{Rewriter, RuleReport, output::render, tokenize};

/// Where the source to rewrite comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read from a file
    File(PathBuf),
    /// Already in memory (e.g. read from stdin)
    Text(String),
}

/// Options for the apply command
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Rule file
    pub patch: Option<PathBuf>,
    /// Source to rewrite
    pub source: Option<Source>,
    /// Output file; the result is only returned when unset
    pub output: Option<PathBuf>,
}

/// Result of an apply operation
#[derive(Debug)]
pub struct ApplyResult {
    /// The rewritten source
    pub text: String,
    /// File the text was written to, if any
    pub written_to: Option<PathBuf>,
    /// What each top-level rule did
    pub reports: Vec<RuleReport>,
}

/// Execute an apply operation
///
/// Missing inputs are reported before anything is read. The rule file is
/// parsed completely before any rule is applied, so a malformed rule file
/// never leaves a partially rewritten output behind.
pub fn execute_apply(options: &ApplyOptions) -> Result<ApplyResult, CliError> {
    let patch = options.patch.as_ref().ok_or(CliError::NoRuleFile)?;
    let source = options.source.as_ref().ok_or(CliError::NoInput)?;

    let rules = load_rules(patch)?;
    let text = match source {
        Source::File(path) => read_file(path)?,
        Source::Text(text) => text.clone(),
    };

    let nested: usize = rules.iter().map(|rule| rule.nested_count()).sum();
    info!(rules = rules.len(), nested, "loaded {}", patch.display());

    let mut rewriter = Rewriter::new();
    let tokens = rewriter.apply_rules(&rules, tokenize(&text));
    let text = render(&tokens);

    if let Some(path) = &options.output {
        std::fs::write(path, &text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
    }

    Ok(ApplyResult {
        text,
        written_to: options.output.clone(),
        reports: rewriter.into_reports(),
    })
}
