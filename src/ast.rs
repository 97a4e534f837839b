//! # tokpatch - Rule Model
//!
//! This module defines the data the rewrite engine works on: classified
//! source tokens and the compiled form of rewrite rules.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[pattern]** - Compiled patterns: literal tokens and capture items
//! - **[template]** - Substitution templates, kept verbatim
//! - **[rule]** - A pattern, its template and its follow-up rules
//!
//! ## Quick Start
//!
//! ```text
//! @@{
//! rtcNewScene ( EXPR device ) )
//! =>
//! rtcNewScene(device)
//! }@@
//! ```
//!
//! This rule drops the second argument of every `rtcNewScene` call.
//!
//! ## Core Concepts
//!
//! ### Tokens
//!
//! Source text is split into identifiers, numbers, brackets, single
//! characters and *delimiters* (newlines, whitespace runs and comments).
//! Delimiters are skipped while matching, so a pattern does not care about
//! the layout of the code it is matched against.
//!
//! ### Captures
//!
//! - **`ID name`** binds exactly one identifier token
//! - **`EXPR name term`** binds everything up to `term`, skipping over
//!   balanced `( ... )` and `{ ... }` regions
//!
//! Once bound during a rule's scan, a name must bind to the same tokens at
//! every later match of that rule.
//!
//! ### Follow-up Rules
//!
//! Rules nested inside a rule block run right after a successful match, on
//! the rest of the enclosing `{ ... }` scope, seeded with the parent's
//! captures.
pub mod pattern;
pub mod rule;
pub mod template;
pub mod tokens;

pub use pattern::{Pattern, PatternError, PatternItem};
pub use rule::Rule;
pub use template::Template;
pub use tokens::{Token, TokenKind};
