//! Rendering of token lists and JSON views of rewrite results.
//!
//! - [`render()`] turns a token list back into source text
//! - [`tokens_to_json()`] dumps a token list for inspection
//! - [`reports_to_json()`] summarizes what each rule did

use serde_json::{Value, json};

use crate::{ast::Token, rewriter::RuleReport};

/// Concatenates the token texts.
///
/// For an untouched token list this reproduces the lexed source exactly.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// `[{"kind": "identifier", "text": "foo"}, ...]`
pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|token| json!({ "kind": token.kind().name(), "text": token.text() }))
            .collect(),
    )
}

/// Per-rule match counts plus totals.
///
/// ```
/// use tokpatch::output::reports_to_json;
/// use tokpatch::RuleReport;
///
/// let reports = vec![RuleReport { index: 0, line: 3, matches: 2, follow_up_matches: 1 }];
/// let json = reports_to_json(&reports);
/// assert_eq!(json["total_matches"], 3);
/// assert_eq!(json["rules"][0]["line"], 3);
/// ```
pub fn reports_to_json(reports: &[RuleReport]) -> Value {
    let total: usize = reports
        .iter()
        .map(|report| report.matches + report.follow_up_matches)
        .sum();

    json!({
        "rules": reports
            .iter()
            .map(|report| json!({
                "index": report.index,
                "line": report.line,
                "matches": report.matches,
                "follow_up_matches": report.follow_up_matches,
            }))
            .collect::<Vec<_>>(),
        "total_matches": total,
    })
}
