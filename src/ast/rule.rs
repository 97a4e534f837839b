use super::{Pattern, PatternError, Template};
use crate::compiler::{compile_pattern, compile_template};

/// A rewrite rule.
///
/// Follow-up rules run right after each successful match of this rule, in
/// declaration order, on the remainder of the enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub template: Template,
    pub follow_ups: Vec<Rule>,
    /// 1-based line of the opening `@@{` marker, 0 for rules built in code
    pub line: usize,
}

impl Rule {
    /// Compiles a rule from pattern and substitution text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpatch::Rule;
    ///
    /// let rule = Rule::new("rtcInit ( )", "rtcNewDevice(NULL)").unwrap();
    /// assert_eq!(rule.pattern.to_string(), "rtcInit ( )");
    /// assert!(rule.follow_ups.is_empty());
    /// ```
    pub fn new(pattern: &str, substitution: &str) -> Result<Self, PatternError> {
        Ok(Rule {
            pattern: compile_pattern(pattern)?,
            template: compile_template(substitution),
            follow_ups: Vec::new(),
            line: 0,
        })
    }

    pub fn with_follow_up(mut self, rule: Rule) -> Self {
        self.follow_ups.push(rule);
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Number of rules nested below this one, at any depth.
    pub fn nested_count(&self) -> usize {
        self.follow_ups
            .iter()
            .map(|rule| 1 + rule.nested_count())
            .sum()
    }
}
