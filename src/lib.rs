//! Rule-driven lexical rewriting of source code.
//!
//! Source text is lexed into tokens, and rules of the form
//! *pattern => substitution* are applied one after the other over the whole
//! token stream. Patterns can capture identifiers (`ID name`) and balanced
//! expressions (`EXPR name terminator`); captures are spliced into the
//! substitution. No syntax tree is built, so any C-like language can be
//! migrated this way.
pub mod ast;
pub mod cli;
pub mod compiler;
pub mod environment;
pub mod lexer;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod rewriter;
pub mod transform;

pub use ast::{Pattern, PatternError, PatternItem, Rule, Template, Token, TokenKind};
pub use compiler::{compile_pattern, compile_template};
pub use environment::Environment;
pub use lexer::{Lexer, tokenize};
pub use matcher::match_rule;
pub use output::render;
pub use parser::{ParseError, ParseErrorKind, parse_rules};
pub use rewriter::{Rewriter, RuleReport, apply_rule, rewrite};
pub use transform::substitute;
