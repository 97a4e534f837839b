use crate::ast::{Token, TokenKind};

/// Splits source text into classified tokens.
///
/// Lexing cannot fail: every character ends up in some token, and the token
/// texts concatenate back to the input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

fn is_delimiter_char(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_bracket(ch: char) -> bool {
    matches!(ch, '(' | ')' | '[' | ']' | '{' | '}')
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.peek_char(offset) == Some(ch))
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_line_comment(&mut self) -> String {
        self.read_while(|ch| ch != '\n')
    }

    fn read_block_comment(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if self.starts_with("*/") {
                break;
            }
            result.push(ch);
            self.advance();
        }
        if self.starts_with("*/") {
            result.push_str("*/");
            self.position += 2;
        }
        result
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        self.advance();
        Token::new(kind, ch)
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let ch = self.current_char()?;

        let token = match ch {
            '\n' => self.single(TokenKind::Newline, ch),
            c if is_delimiter_char(c) => {
                Token::new(TokenKind::Whitespace, self.read_while(is_delimiter_char))
            }
            c if is_identifier_start(c) => {
                Token::new(TokenKind::Identifier, self.read_while(is_identifier_char))
            }
            c if c.is_ascii_digit() => {
                Token::new(TokenKind::Number, self.read_while(|c| c.is_ascii_digit()))
            }
            // The line feed ending a line comment is lexed as its own token
            '/' if self.starts_with("//") => {
                Token::new(TokenKind::LineComment, self.read_line_comment())
            }
            '/' if self.starts_with("/*") => {
                Token::new(TokenKind::BlockComment, self.read_block_comment())
            }
            c if is_bracket(c) => self.single(TokenKind::Bracket, c),
            c => self.single(TokenKind::Other, c),
        };

        Some(token)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Lexes the whole input.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

#[test]
fn test_call_site() {
    let mut lexer = Lexer::new("rtcCommit(scene);\n");
    assert_eq!(lexer.next_token(), Some(Token::identifier("rtcCommit")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Bracket, "(")));
    assert_eq!(lexer.next_token(), Some(Token::identifier("scene")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Bracket, ")")));
    assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Other, ";")));
    assert_eq!(lexer.next_token(), Some(Token::newline()));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_comments_are_opaque() {
    let mut lexer = Lexer::new("/* f(x) */ // g(y)\n");
    assert_eq!(
        lexer.next_token(),
        Some(Token::new(TokenKind::BlockComment, "/* f(x) */"))
    );
    assert_eq!(lexer.next_token(), Some(Token::spaces(1)));
    assert_eq!(
        lexer.next_token(),
        Some(Token::new(TokenKind::LineComment, "// g(y)"))
    );
    assert_eq!(lexer.next_token(), Some(Token::newline()));
    assert_eq!(lexer.next_token(), None);
}
