//! Documentation content for the tokpatch CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Format,
    Placeholders,
    FollowUps,
    Matching,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "format" | "file" | "rules" => Some(Self::Format),
            "placeholders" | "captures" | "id" | "expr" => Some(Self::Placeholders),
            "follow-ups" | "followups" | "nested" => Some(Self::FollowUps),
            "matching" | "match" | "tokens" => Some(Self::Matching),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"TOKPATCH DOCUMENTATION

tokpatch rewrites source code with pattern => substitution rules. The source is
split into tokens, and every rule in the rule file is applied, in order, over
the whole token stream. No syntax tree is built.

DOCUMENTATION CATEGORIES

  format            Layout of a rule file: blocks, =>, comments
  placeholders      ID and EXPR captures and how substitutions use them
  follow-ups        Nested rules that run after a match, inside its scope
  matching          Tokens, whitespace, comments and capture consistency

QUICK REFERENCE

  @@{ ... }@@       Rule block
  =>                Separates pattern from substitution
  ID name           Capture one identifier
  EXPR name ;       Capture everything up to ';' (brackets balanced)

Run 'tokpatch doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Format) => Ok(FORMAT_DOC),
        Some(DocCategory::Placeholders) => Ok(PLACEHOLDERS_DOC),
        Some(DocCategory::FollowUps) => Ok(FOLLOW_UPS_DOC),
        Some(DocCategory::Matching) => Ok(MATCHING_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const FORMAT_DOC: &str = r#"FORMAT - Rule Files

RULE BLOCKS
  A rule starts with a line beginning with @@{ and ends with a line beginning
  with }@@. Lines before a line beginning with => are the pattern, lines after
  it are the substitution.

    @@{
    rtcInit ( )
    =>
    rtcNewDevice(NULL)
    }@@

DELETING
  Without a => line the substitution is empty and every match is removed.

    @@{
    rtcDebug ( ) ;
    }@@

BETWEEN BLOCKS
  Blank lines and lines starting with // are ignored between blocks. Any other
  text outside a block is an error.

ORDER
  Rules run one after the other, each over the output of the previous one.
  Later rules can rely on the shapes earlier rules produced.

ERRORS
  Unclosed blocks, stray text and malformed placeholders abort the run with
  the offending line number. Nothing is rewritten.
"#;

const PLACEHOLDERS_DOC: &str = r#"PLACEHOLDERS - Captures

ID name
  Matches exactly one identifier and binds it to name.

    @@{
    rtcDeleteGeometry ( ID scene , ID geom ) ;
    =>
    rtcDetachGeometry(scene, geom);
    }@@

EXPR name terminator
  Matches everything up to the next terminator token and binds it to name.
  Parentheses and braces are skipped as a whole, so the capture may contain
  the terminator inside them. The terminator itself is consumed.

    @@{
    rtcIntersect ( EXPR scene , EXPR ray )
    =>
    rtcIntersect1(scene, &context, RTCRayHit_(ray))
    }@@

  Against rtcIntersect(s, make(a, b)) this binds scene to s and ray to
  make(a, b).

SUBSTITUTION
  Any identifier in the substitution that names a capture is replaced by the
  captured tokens. Everything else, whitespace and comments included, is copied
  as written. Continuation lines are indented to the column of the match.
"#;

const FOLLOW_UPS_DOC: &str = r#"FOLLOW-UPS - Nested Rules

Rule blocks written inside another block, after its substitution, are
follow-up rules. After each match of the outer rule they run, in order, over
the rest of the current { ... } scope, starting with the captures of the outer
match.

    @@{
    RTCRay ID ray ;
    =>
    RTCRayHit ray;
    @@{
    ID ray . geomID
    =>
    ray.hit.geomID
    }@@
    }@@

  The follow-up starts with ray already bound, so ID ray only matches the
  variable declared by the outer match. Uses are rewritten up to the brace
  closing the scope of that declaration.

  Captures bound by a follow-up rule are not visible to the outer rule.
"#;

const MATCHING_DOC: &str = r#"MATCHING - Tokens and Consistency

TOKENS
  identifiers       letters, digits and _, not starting with a digit
  numbers           runs of digits (1.5 is 1 . 5)
  brackets          ( ) [ ] { }
  delimiters        newlines, spaces, tabs, // and /* */ comments
  other             any other single character

DELIMITERS
  Delimiters are ignored while matching: f(a,b) and f ( a , b ) match the
  same pattern. Code inside comments is never matched or rewritten.

CONSISTENCY
  Within one rule, a capture keeps the value of its first match. Later
  matches of the same rule must capture the same tokens, ignoring layout, or
  they are skipped.

    @@{
    rtcCommit ( ID scene )
    =>
    rtcCommitScene(scene)
    }@@

  Against rtcCommit(a); rtcCommit(b); only the first call is rewritten.
  Every top-level rule starts with no captures.

SCOPES
  A rule stops scanning at a } that closes a scope it did not see open. For
  top-level rules this means an unbalanced } ends the rewrite of the file.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_aliases() {
        assert_eq!(DocCategory::from_str("Follow_Ups"), Some(DocCategory::FollowUps));
        assert_eq!(DocCategory::from_str("expr"), Some(DocCategory::Placeholders));
        assert_eq!(DocCategory::from_str("unknown"), None);
    }

    #[test]
    fn test_unknown_category() {
        assert!(matches!(
            get_doc_category("nope"),
            Err(CliError::UnknownCategory(name)) if name == "nope"
        ));
    }
}
