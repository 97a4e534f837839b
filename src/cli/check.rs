//! Validate a rule file without applying it

use std::{fmt, path::Path};

use super::{CliError, load_rules};

/// Summary of one top-level rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutline {
    /// Line of the rule's `@@{` marker
    pub line: usize,
    /// The compiled pattern, one space between items
    pub pattern: String,
    /// Capture names bound by the pattern
    pub captures: Vec<String>,
    /// Rules nested below this one, at any depth
    pub follow_ups: usize,
    /// The rule has no substitution and deletes what it matches
    pub deletes: bool,
}

impl fmt::Display for RuleOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.pattern)?;
        if !self.captures.is_empty() {
            write!(f, " [captures: {}]", self.captures.join(", "))?;
        }
        if self.follow_ups > 0 {
            write!(f, " (+{} follow-up rules)", self.follow_ups)?;
        }
        if self.deletes {
            write!(f, " (deletes match)")?;
        }
        Ok(())
    }
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub rules: Vec<RuleOutline>,
}

/// Parse and compile the rule file at `patch`
pub fn execute_check(patch: &Path) -> Result<CheckResult, CliError> {
    let rules = load_rules(patch)?
        .iter()
        .map(|rule| RuleOutline {
            line: rule.line,
            pattern: rule.pattern.to_string(),
            captures: rule
                .pattern
                .capture_names()
                .into_iter()
                .map(String::from)
                .collect(),
            follow_ups: rule.nested_count(),
            deletes: rule.template.is_empty(),
        })
        .collect();

    Ok(CheckResult { rules })
}
