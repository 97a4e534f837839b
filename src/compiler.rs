//! Compiles rule text into patterns and templates.

use crate::ast::pattern::{EXPR_PLACEHOLDER, ID_PLACEHOLDER};
use crate::ast::{Pattern, PatternError, PatternItem, Template, Token};
use crate::lexer::Lexer;

/// Compiles pattern text.
///
/// Delimiters are dropped, so `f ( ID x )` and `f(ID x)` compile to the same
/// pattern. `ID name` and `EXPR name term` become capture items, every other
/// token is a literal.
pub fn compile_pattern(text: &str) -> Result<Pattern, PatternError> {
    let mut tokens = Lexer::new(text).filter(|token| !token.is_delimiter());
    let mut items = Vec::new();

    while let Some(token) = tokens.next() {
        let item = match token.text() {
            ID_PLACEHOLDER => PatternItem::Ident {
                name: capture_name(tokens.next(), ID_PLACEHOLDER)?,
            },
            EXPR_PLACEHOLDER => {
                let name = capture_name(tokens.next(), EXPR_PLACEHOLDER)?;
                let terminator = tokens
                    .next()
                    .ok_or_else(|| PatternError::MissingTerminator { name: name.clone() })?;
                PatternItem::Expr { name, terminator }
            }
            _ => PatternItem::Literal(token),
        };
        items.push(item);
    }

    Pattern::new(items)
}

fn capture_name(token: Option<Token>, placeholder: &'static str) -> Result<String, PatternError> {
    match token {
        Some(token) if token.is_identifier() => Ok(token.text().to_string()),
        _ => Err(PatternError::MissingCaptureName { placeholder }),
    }
}

/// Compiles substitution text. Every token is kept.
pub fn compile_template(text: &str) -> Template {
    Template::new(Lexer::new(text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TokenKind;

    #[test]
    fn test_layout_is_ignored() {
        let spaced = compile_pattern("f ( ID x )").unwrap();
        let packed = compile_pattern("f(ID x)").unwrap();
        let split = compile_pattern("f\n  (ID x) // note\n").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced, split);
    }

    #[test]
    fn test_placeholders() {
        let pattern = compile_pattern("g ( EXPR a , ID b )").unwrap();
        assert_eq!(
            pattern.items(),
            &[
                PatternItem::Literal(Token::identifier("g")),
                PatternItem::Literal(Token::new(TokenKind::Bracket, "(")),
                PatternItem::Expr {
                    name: "a".into(),
                    terminator: Token::new(TokenKind::Other, ","),
                },
                PatternItem::Ident { name: "b".into() },
                PatternItem::Literal(Token::new(TokenKind::Bracket, ")")),
            ]
        );
        assert_eq!(pattern.capture_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_placeholder_errors() {
        assert_eq!(compile_pattern("  \n// nothing\n"), Err(PatternError::Empty));
        assert_eq!(
            compile_pattern("f ( ID )"),
            Err(PatternError::MissingCaptureName { placeholder: "ID" })
        );
        assert_eq!(
            compile_pattern("f ( EXPR x"),
            Err(PatternError::MissingTerminator { name: "x".into() })
        );
    }

    #[test]
    fn test_template_keeps_layout() {
        let template = compile_template("a(\n  b) /* c */");
        let text: String = template.tokens().iter().map(Token::text).collect();
        assert_eq!(text, "a(\n  b) /* c */");
    }
}
