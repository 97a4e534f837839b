use std::fmt;

/// Classification of a source token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Delimiters
    /// A single line feed
    Newline,

    /// Run of spaces, tabs, carriage returns and line feeds
    ///
    /// A run never starts with a line feed; a line feed at the start of a run
    /// is a [`TokenKind::Newline`] of its own.
    ///
    /// # Examples
    /// ```text
    /// "    "
    /// " \t"
    /// " \n  "
    /// ```
    Whitespace,

    /// `//` up to, but excluding, the end of the line
    LineComment,

    /// `/*` through the matching `*/`, or to the end of input if unterminated
    ///
    /// The whole comment is one token; its contents are never matched.
    BlockComment,

    // Significant tokens
    /// Letter or underscore followed by letters, digits or underscores
    ///
    /// # Examples
    /// ```text
    /// rtcNewScene
    /// _hidden
    /// RTC_GEOMETRY_TYPE_TRIANGLE
    /// ```
    Identifier,

    /// Run of decimal digits
    ///
    /// `1.5` is three tokens: `1`, `.` and `5`.
    Number,

    /// One of `(`, `)`, `[`, `]`, `{`, `}`
    Bracket,

    /// Any other single character
    Other,
}

impl TokenKind {
    /// Delimiters are skipped while matching and never start a match.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Newline
                | TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line-comment",
            TokenKind::BlockComment => "block-comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Bracket => "bracket",
            TokenKind::Other => "other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of source text.
///
/// Concatenating the text of every token of a list reproduces the source the
/// list was lexed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Identifier, text)
    }

    pub fn newline() -> Self {
        Token::new(TokenKind::Newline, "\n")
    }

    /// Whitespace token made of `width` spaces.
    pub fn spaces(width: usize) -> Self {
        Token::new(TokenKind::Whitespace, " ".repeat(width))
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn is_delimiter(&self) -> bool {
        self.kind.is_delimiter()
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }

    /// Column after this token, given the column before it.
    ///
    /// A line feed resets the column to zero, every other character advances
    /// it by one.
    pub fn advance_column(&self, column: usize) -> usize {
        self.text.chars().fold(column, |column, ch| match ch {
            '\n' => 0,
            _ => column + 1,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Compares two token sequences while ignoring delimiters.
pub fn same_significant_tokens(left: &[Token], right: &[Token]) -> bool {
    fn significant(tokens: &[Token]) -> impl Iterator<Item = &str> {
        tokens
            .iter()
            .filter(|token| !token.is_delimiter())
            .map(Token::text)
    }
    significant(left).eq(significant(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_column() {
        assert_eq!(Token::spaces(4).advance_column(0), 4);
        assert_eq!(Token::new(TokenKind::Whitespace, "  \n   ").advance_column(10), 3);
        assert_eq!(Token::newline().advance_column(7), 0);
    }

    #[test]
    fn test_same_significant_tokens_ignores_layout() {
        let left = vec![
            Token::identifier("a"),
            Token::spaces(1),
            Token::new(TokenKind::Other, "+"),
            Token::new(TokenKind::BlockComment, "/* x */"),
            Token::identifier("b"),
        ];
        let right = vec![
            Token::identifier("a"),
            Token::new(TokenKind::Other, "+"),
            Token::identifier("b"),
        ];
        assert!(same_significant_tokens(&left, &right));
        assert!(!same_significant_tokens(&left, &right[..2]));
    }
}
