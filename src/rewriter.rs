use tracing::{debug, info, trace};

use crate::{
    ast::{Rule, Token},
    environment::Environment,
    lexer::tokenize,
    matcher::match_rule,
    output::render,
    transform::substitute,
};

/// Match counts gathered while applying one top-level rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleReport {
    /// Position of the rule in the rule list
    pub index: usize,
    /// Line of the rule's `@@{` marker, 0 for rules built in code
    pub line: usize,
    /// Successful matches of the rule itself
    pub matches: usize,
    /// Successful matches of its follow-up rules, at any depth
    pub follow_up_matches: usize,
}

/// Applies a rule list to token streams, one rule after the other.
///
/// Each top-level rule gets a fresh [`Environment`] and sees the output of
/// the rules before it.
#[derive(Debug, Default)]
pub struct Rewriter {
    reports: Vec<RuleReport>,
}

impl Rewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every rule in order and returns the final token list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpatch::{lexer::tokenize, output::render, Rewriter, Rule};
    ///
    /// let rules = vec![
    ///     Rule::new("rtcInit ( )", "rtcNewDevice(NULL)").unwrap(),
    ///     Rule::new("rtcExit ( )", "rtcReleaseDevice(device)").unwrap(),
    /// ];
    ///
    /// let mut rewriter = Rewriter::new();
    /// let tokens = rewriter.apply_rules(&rules, tokenize("rtcInit();\nrtcExit();\n"));
    /// assert_eq!(render(&tokens), "rtcNewDevice(NULL);\nrtcReleaseDevice(device);\n");
    /// assert_eq!(rewriter.reports()[0].matches, 1);
    /// ```
    pub fn apply_rules(&mut self, rules: &[Rule], mut tokens: Vec<Token>) -> Vec<Token> {
        for (index, rule) in rules.iter().enumerate() {
            info!("applying rule {} of {} rules", index, rules.len());

            let mut env = Environment::new();
            let mut scan = Scan::default();
            tokens = scan.apply(rule, &mut env, tokens, false);

            self.reports.push(RuleReport {
                index,
                line: rule.line,
                matches: scan.matches,
                follow_up_matches: scan.follow_up_matches,
            });
        }
        tokens
    }

    pub fn reports(&self) -> &[RuleReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<RuleReport> {
        self.reports
    }
}

/// Applies one rule to `tokens`, sharing `env` across every match attempt.
///
/// Scanning stops early at a `}` closing a scope that was opened before
/// `tokens` started; that brace and everything after it are returned
/// unchanged.
pub fn apply_rule(rule: &Rule, env: &mut Environment, tokens: Vec<Token>) -> Vec<Token> {
    Scan::default().apply(rule, env, tokens, false)
}

/// Lexes `source`, applies `rules` and renders the result.
pub fn rewrite(rules: &[Rule], source: &str) -> String {
    render(&Rewriter::new().apply_rules(rules, tokenize(source)))
}

#[derive(Debug, Default)]
struct Scan {
    matches: usize,
    follow_up_matches: usize,
}

impl Scan {
    fn apply(
        &mut self,
        rule: &Rule,
        env: &mut Environment,
        mut tokens: Vec<Token>,
        follow_up: bool,
    ) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut position = 0;
        let mut depth: i64 = 0;
        let mut indent = 0;

        while position < tokens.len() {
            if tokens[position].is_delimiter() {
                indent = tokens[position].advance_column(indent);
                result.push(tokens[position].clone());
                position += 1;
                continue;
            }

            if let Some(consumed) = match_rule(&rule.pattern, &tokens[position..], env) {
                debug!(rule = rule.line, position, consumed, "pattern matched");
                if follow_up {
                    self.follow_up_matches += 1;
                } else {
                    self.matches += 1;
                }

                result.extend(substitute(env, &rule.template, indent));
                position += consumed;

                if !rule.follow_ups.is_empty() {
                    let mut remainder = tokens.split_off(position);
                    for next in &rule.follow_ups {
                        trace!(rule = next.line, "applying follow-up rule");
                        let mut seeded = env.clone();
                        remainder = self.apply(next, &mut seeded, remainder, true);
                    }
                    tokens = remainder;
                    position = 0;
                }
                continue;
            }

            match tokens[position].text() {
                "{" => depth += 1,
                "}" => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                result.extend(tokens.drain(position..));
                return result;
            }
            result.push(tokens[position].clone());
            position += 1;
        }

        result
    }
}
