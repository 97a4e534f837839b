use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokpatch::cli::{ApplyOptions, CliError, Source, execute_apply, execute_check};
use tokpatch::output::reports_to_json;

const EMBREE_RULES: &str = "\
// embree2 -> embree3 migration excerpt

@@{
rtcInit ( EXPR cfg )
=>
RTCDevice g_device = rtcNewDevice(cfg)
}@@

@@{
rtcNewScene ( EXPR flags , EXPR algo )
=>
rtcNewScene(g_device)
}@@

@@{
rtcCommit ( ID scene ) ;
=>
rtcCommitScene(scene);
rtcJoinCommitScene(scene);
}@@

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

@@{
rtcExit ( ) ;
}@@
";

const SOURCE: &str = "\
int main() {
  rtcInit(NULL);
  RTCScene scene = rtcNewScene(RTC_SCENE_STATIC, RTC_INTERSECT1);
  /* rtcCommit(scene); is done below */
  rtcCommit(scene);
  {
    RTCRay r;
    trace(r);
    if (r.geomID == 0) hit();
  }
  other.geomID = 1;
  rtcExit();
  return 0;
}
";

const EXPECTED: &str = "\
int main() {
  RTCDevice g_device = rtcNewDevice(NULL);
  RTCScene scene = rtcNewScene(g_device);
  /* rtcCommit(scene); is done below */
  rtcCommitScene(scene);
  rtcJoinCommitScene(scene);
  {
    RTCRayHit r;
    trace(r);
    if (r.hit.geomID == 0) hit();
  }
  other.geomID = 1;
\x20\x20
  return 0;
}
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(patch: &Path, source: Source) -> ApplyOptions {
    ApplyOptions {
        patch: Some(patch.to_path_buf()),
        source: Some(source),
        output: None,
    }
}

#[test]
fn test_apply_migration() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "embree.patch", EMBREE_RULES);
    let input = write(&dir, "main.cpp", SOURCE);

    let result = execute_apply(&options(&patch, Source::File(input))).unwrap();
    assert_eq!(result.text, EXPECTED);
    assert_eq!(result.written_to, None);

    let matches: Vec<usize> = result.reports.iter().map(|r| r.matches).collect();
    assert_eq!(matches, vec![1, 1, 1, 1, 1]);
    assert_eq!(result.reports[3].follow_up_matches, 1);
    assert_eq!(result.reports[3].line, 22);
}

#[test]
fn test_apply_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "embree.patch", EMBREE_RULES);
    let out = dir.path().join("out.cpp");

    let mut opts = options(&patch, Source::Text(SOURCE.to_string()));
    opts.output = Some(out.clone());

    let result = execute_apply(&opts).unwrap();
    assert_eq!(result.written_to, Some(out.clone()));
    assert_eq!(fs::read_to_string(&out).unwrap(), EXPECTED);
}

#[test]
fn test_apply_without_matches_is_identity() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "noop.patch", "@@{\nneverCalled ( EXPR x )\n=>\ny\n}@@\n");

    let result = execute_apply(&options(&patch, Source::Text(SOURCE.to_string()))).unwrap();
    assert_eq!(result.text, SOURCE);
    assert_eq!(result.reports[0].matches, 0);
}

#[test]
fn test_report_json() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "embree.patch", EMBREE_RULES);

    let result = execute_apply(&options(&patch, Source::Text(SOURCE.to_string()))).unwrap();
    let json = reports_to_json(&result.reports);
    assert_eq!(json["total_matches"], 6);
    assert_eq!(json["rules"].as_array().unwrap().len(), 5);
    assert_eq!(json["rules"][0]["line"], 3);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_rule_file_option() {
    let opts = ApplyOptions {
        patch: None,
        source: Some(Source::Text(String::new())),
        output: None,
    };
    assert!(matches!(execute_apply(&opts), Err(CliError::NoRuleFile)));
}

#[test]
fn test_missing_input_is_reported_before_reading_rules() {
    let opts = ApplyOptions {
        patch: Some(PathBuf::from("/definitely/not/here.patch")),
        source: None,
        output: None,
    };
    assert!(matches!(execute_apply(&opts), Err(CliError::NoInput)));
}

#[test]
fn test_unreadable_rule_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.patch");
    let err = execute_apply(&options(&missing, Source::Text(String::new()))).unwrap_err();
    assert!(matches!(err, CliError::Read { ref path, .. } if path == &missing));
}

#[test]
fn test_parse_error_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "broken.patch", "@@{\na\n=>\nb\n}@@\n@@{\nc\n");
    let out = dir.path().join("out.cpp");

    let mut opts = options(&patch, Source::Text("a c".to_string()));
    opts.output = Some(out.clone());

    let err = execute_apply(&opts).unwrap_err();
    assert!(err.to_string().ends_with("broken.patch: line 6: rule block is never closed"));
    assert!(!out.exists());
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_check_outlines_rules() {
    let dir = TempDir::new().unwrap();
    let patch = write(&dir, "embree.patch", EMBREE_RULES);

    let result = execute_check(&patch).unwrap();
    assert_eq!(result.rules.len(), 5);
    assert!(!result.rules[0].deletes);
    assert!(result.rules[4].deletes);
    assert_eq!(
        result.rules[1].to_string(),
        "line 9: rtcNewScene ( EXPR flags , EXPR algo ) [captures: flags, algo]"
    );
    assert_eq!(
        result.rules[3].to_string(),
        "line 22: RTCRay ID ray ; [captures: ray] (+1 follow-up rules)"
    );
    assert_eq!(result.rules[4].to_string(), "line 33: rtcExit ( ) ; (deletes match)");
}
