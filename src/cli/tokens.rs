//! Show how a source is split into tokens

use super::CliError;
use crate::{output::tokens_to_json, tokenize};

/// Lex `source` and format the tokens for display.
///
/// Useful when a pattern does not match: the dump shows exactly which tokens
/// the pattern has to line up with. Plain output has one token per line,
/// prefixed with its 1-based `line:column`.
pub fn execute_tokens(source: &str, json: bool) -> Result<String, CliError> {
    let tokens = tokenize(source);
    if json {
        return Ok(serde_json::to_string_pretty(&tokens_to_json(&tokens))?);
    }

    let mut out = String::new();
    let mut line = 1;
    let mut column = 0;
    for token in &tokens {
        out.push_str(&format!(
            "{}:{} {} {:?}\n",
            line,
            column + 1,
            token.kind(),
            token.text()
        ));
        line += token.text().matches('\n').count();
        column = token.advance_column(column);
    }
    Ok(out)
}
