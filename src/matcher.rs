//! Aligns a compiled pattern with the token stream.
//!
//! Matching walks the pattern once, left to right, and commits to every item
//! as soon as it matches; there is no backtracking. Delimiter tokens in the
//! stream are stepped over between items.

use crate::ast::{Pattern, PatternItem, Token};
use crate::environment::Environment;

/// Matches `pattern` at the start of `tokens`.
///
/// Returns the number of tokens consumed, so the unmatched remainder is
/// `&tokens[consumed..]`. On failure `env` is left as it was before the call.
pub fn match_rule(pattern: &Pattern, tokens: &[Token], env: &mut Environment) -> Option<usize> {
    let checkpoint = env.checkpoint();
    let mut matcher = Matcher {
        tokens,
        position: 0,
        env,
    };

    for item in pattern.items() {
        if !matcher.match_item(item) {
            matcher.env.rollback(checkpoint);
            return None;
        }
    }

    Some(matcher.position)
}

struct Matcher<'a> {
    tokens: &'a [Token],
    position: usize,
    env: &'a mut Environment,
}

impl Matcher<'_> {
    fn skip_delimiters(&mut self) {
        while self
            .tokens
            .get(self.position)
            .is_some_and(Token::is_delimiter)
        {
            self.position += 1;
        }
    }

    fn match_item(&mut self, item: &PatternItem) -> bool {
        self.skip_delimiters();
        let tokens = self.tokens;
        let Some(token) = tokens.get(self.position) else {
            return false;
        };

        match item {
            PatternItem::Literal(literal) => {
                if token.text() != literal.text() {
                    return false;
                }
                self.position += 1;
                true
            }
            PatternItem::Ident { name } => {
                if !token.is_identifier() || !self.env.bind(name, vec![token.clone()]) {
                    return false;
                }
                self.position += 1;
                true
            }
            PatternItem::Expr { name, terminator } => {
                let start = self.position;
                let Some(end) = find_terminator(tokens, start, terminator.text()) else {
                    return false;
                };
                if !self.env.bind(name, tokens[start..end].to_vec()) {
                    return false;
                }
                self.position = end + 1;
                true
            }
        }
    }
}

/// Index of the first `terminator` at nesting depth zero, searching from
/// `position`.
///
/// `(` and `{` open regions that are skipped up to their matching `)` or `}`.
/// Square brackets do not nest. A token equal to the closer currently
/// expected is checked before it can open a region.
fn find_terminator(tokens: &[Token], position: usize, terminator: &str) -> Option<usize> {
    let mut closers: Vec<&str> = Vec::new();

    for (index, token) in tokens.iter().enumerate().skip(position) {
        let expected = closers.last().copied().unwrap_or(terminator);
        if token.is(expected) {
            if closers.pop().is_none() {
                return Some(index);
            }
            continue;
        }
        match token.text() {
            "(" => closers.push(")"),
            "{" => closers.push("}"),
            _ => {}
        }
    }
    None
}
