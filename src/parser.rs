//! Rule-file parser.
//!
//! A rule file is a sequence of blocks:
//!
//! ```text
//! // comment lines and blank lines are allowed between blocks
//! @@{
//! pattern text
//! =>
//! substitution text
//! @@{
//! follow-up pattern
//! =>
//! follow-up substitution
//! }@@
//! }@@
//! ```
//!
//! The `=>` line is optional; without it matches are deleted.

use thiserror::Error;

use crate::ast::{PatternError, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Open,
    Close,
    Arrow,
    Comment,
    Blank,
    Text,
}

/// Markers are only recognized at the very start of a line.
fn classify(line: &str) -> LineKind {
    const MARKERS: [(&str, LineKind); 4] = [
        ("@@{", LineKind::Open),
        ("}@@", LineKind::Close),
        ("=>", LineKind::Arrow),
        ("//", LineKind::Comment),
    ];

    if let Some((_, kind)) = MARKERS.iter().find(|(marker, _)| line.starts_with(*marker)) {
        return *kind;
    }
    if line.trim_start_matches([' ', '\t', '\r', '\n']).is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

/// A fatal rule-file error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line the error was detected at
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected line {0:?}")]
    UnexpectedLine(String),

    #[error("rule block is never closed")]
    UnterminatedBlock,

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
}

/// Parses and compiles a rule file.
///
/// # Examples
///
/// ```
/// use tokpatch::parse_rules;
///
/// let rules = parse_rules("@@{\nrtcInit ( )\n=>\nrtcNewDevice(NULL)\n}@@\n").unwrap();
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules[0].line, 1);
/// ```
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, ParseError> {
    RuleParser::new(text).parse()
}

struct RuleParser<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> RuleParser<'a> {
    fn new(text: &'a str) -> Self {
        RuleParser {
            lines: text.split_inclusive('\n').collect(),
            position: 0,
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    fn current_kind(&self) -> Option<LineKind> {
        self.current().map(classify)
    }

    fn line_number(&self) -> usize {
        self.position + 1
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn unexpected_line(&self) -> ParseError {
        let text = self.current().unwrap_or_default().trim_end();
        ParseError {
            line: self.line_number(),
            kind: ParseErrorKind::UnexpectedLine(text.to_string()),
        }
    }

    fn parse(mut self) -> Result<Vec<Rule>, ParseError> {
        let mut rules = Vec::new();

        while let Some(kind) = self.current_kind() {
            match kind {
                LineKind::Open => {
                    let opened_at = self.line_number();
                    self.advance();
                    rules.push(self.parse_rule(opened_at)?);
                }
                LineKind::Comment | LineKind::Blank => self.advance(),
                _ => return Err(self.unexpected_line()),
            }
        }

        Ok(rules)
    }

    /// Parses a block body; the opening marker is already consumed.
    fn parse_rule(&mut self, opened_at: usize) -> Result<Rule, ParseError> {
        let pattern = self.read_section();
        let substitution = if self.current_kind() == Some(LineKind::Arrow) {
            self.advance();
            self.read_section()
        } else {
            String::new()
        };

        let mut follow_ups = Vec::new();
        while self.current_kind() == Some(LineKind::Open) {
            let nested_at = self.line_number();
            self.advance();
            follow_ups.push(self.parse_rule(nested_at)?);
        }

        match self.current_kind() {
            Some(LineKind::Close) => self.advance(),
            Some(_) => return Err(self.unexpected_line()),
            None => {
                return Err(ParseError {
                    line: opened_at,
                    kind: ParseErrorKind::UnterminatedBlock,
                });
            }
        }

        let rule = Rule::new(&pattern, &substitution).map_err(|e| ParseError {
            line: opened_at,
            kind: e.into(),
        })?;
        Ok(Rule {
            follow_ups,
            ..rule.at_line(opened_at)
        })
    }

    /// Collects lines up to the next block marker or `=>`, without the
    /// surrounding line feeds.
    fn read_section(&mut self) -> String {
        let mut text = String::new();
        while let Some(line) = self.current() {
            if matches!(classify(line), LineKind::Open | LineKind::Close | LineKind::Arrow) {
                break;
            }
            text.push_str(line);
            self.advance();
        }
        text.trim_matches('\n').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("@@{\n"), LineKind::Open);
        assert_eq!(classify("}@@ trailing\n"), LineKind::Close);
        assert_eq!(classify("=>\n"), LineKind::Arrow);
        assert_eq!(classify("// note\n"), LineKind::Comment);
        assert_eq!(classify(" \t\r\n"), LineKind::Blank);
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("  @@{\n"), LineKind::Text);
        assert_eq!(classify("f(x)\n"), LineKind::Text);
        assert_eq!(classify("@@{\r\n"), LineKind::Open);
        assert_eq!(classify("=>=\n"), LineKind::Arrow);
        assert_eq!(classify("\t \tx\n"), LineKind::Text);
    }
}
