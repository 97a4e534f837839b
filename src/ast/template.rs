use super::Token;

/// Substitution template.
///
/// Kept exactly as written in the rule file, delimiters included, so the
/// replacement keeps the rule author's layout. Identifier tokens naming a
/// capture are expanded when the template is applied.
///
/// # Examples
/// ```text
/// rtcCommitScene(scene);
/// rtcSetGeometryBuildQuality(geom, quality);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn new(tokens: Vec<Token>) -> Self {
        Template { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// An empty template deletes whatever its pattern matched.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
