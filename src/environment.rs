use std::collections::HashMap;

use crate::ast::Token;
use crate::ast::tokens::same_significant_tokens;

/// Capture bindings shared by every match attempt of one rule application.
///
/// The first successful match that binds a name fixes its value for the rest
/// of the scan: later matches of the same name must bind the same tokens,
/// ignoring delimiters, or they fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, Vec<Token>>,
    /// Names in binding order, for rolling back a failed match attempt
    journal: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[Token]> {
        self.bindings.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binds `name`, or checks `tokens` against the existing binding.
    ///
    /// Returns `false` when `name` is already bound to different tokens.
    pub fn bind(&mut self, name: &str, tokens: Vec<Token>) -> bool {
        match self.bindings.get(name) {
            Some(bound) => same_significant_tokens(bound, &tokens),
            None => {
                self.bindings.insert(name.to_string(), tokens);
                self.journal.push(name.to_string());
                true
            }
        }
    }

    pub(crate) fn checkpoint(&self) -> usize {
        self.journal.len()
    }

    /// Forgets every binding made since `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: usize) {
        for name in self.journal.drain(checkpoint..) {
            self.bindings.remove(&name);
        }
    }
}
