use std::fmt;

use thiserror::Error;

use super::Token;

/// Placeholder keyword for a single-identifier capture.
pub const ID_PLACEHOLDER: &str = "ID";

/// Placeholder keyword for a balanced-expression capture.
pub const EXPR_PLACEHOLDER: &str = "EXPR";

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternItem {
    /// Token that must appear verbatim
    Literal(Token),

    /// `ID name`: binds exactly one identifier token
    ///
    /// # Examples
    /// ```text
    /// rtcDeleteGeometry ( ID scene , ID geom )
    /// ```
    Ident { name: String },

    /// `EXPR name term`: binds the tokens up to `term` at nesting depth zero
    ///
    /// Balanced `( ... )` and `{ ... }` regions are taken as a whole, so
    /// the capture may contain the terminator inside brackets. The
    /// terminator itself is consumed but not captured.
    ///
    /// # Examples
    /// ```text
    /// rtcIntersect ( EXPR scene , EXPR ray )
    /// ```
    Expr { name: String, terminator: Token },
}

impl PatternItem {
    /// Name bound by this item, if it is a capture.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            PatternItem::Literal(_) => None,
            PatternItem::Ident { name } | PatternItem::Expr { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for PatternItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternItem::Literal(token) => write!(f, "{}", token),
            PatternItem::Ident { name } => write!(f, "{} {}", ID_PLACEHOLDER, name),
            PatternItem::Expr { name, terminator } => {
                write!(f, "{} {} {}", EXPR_PLACEHOLDER, name, terminator)
            }
        }
    }
}

/// A compiled pattern: significant tokens and captures, delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    items: Vec<PatternItem>,
}

impl Pattern {
    pub fn new(items: Vec<PatternItem>) -> Result<Self, PatternError> {
        if items.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Pattern { items })
    }

    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    /// Capture names in order of first appearance.
    pub fn capture_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.items.iter().filter_map(PatternItem::capture_name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Errors raised while compiling pattern text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("{placeholder} must be followed by a capture name")]
    MissingCaptureName { placeholder: &'static str },

    #[error("EXPR {name} must be followed by a terminator token")]
    MissingTerminator { name: String },
}
