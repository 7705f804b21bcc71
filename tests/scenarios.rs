use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const DOCS: [(&str, &str); 4] = [
    ("canada", r#"{"type": "FeatureCollection", "features": [[-65.6, 43.4]]}"#),
    ("citm_catalog", r#"{"events": {"138586341": {"name": "30th Anniversary Tour"}}}"#),
    ("citylots", r#"{"features": [{"properties": {"BLKLOT": "0001001"}}]}"#),
    ("twitter", r#"{"statuses": [{"id": 505874924095815681, "retweeted": false}]}"#),
];

fn populate(dir: &Path) {
    for (name, body) in DOCS {
        fs::write(dir.join(format!("{}.json", name)), body).unwrap();
    }
}

fn bench(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_serde"))
        .arg(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn reports_every_source_then_total() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let output = bench(dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    for (line, (name, _)) in lines.iter().zip(DOCS) {
        let rest = line.strip_prefix(name).unwrap().trim_start();
        let (time, unit) = rest.split_once(' ').unwrap();
        assert_eq!(unit, "seconds");
        assert_eq!(time.split_once('.').unwrap().1.len(), 6);
        assert!(time.parse::<f64>().unwrap() >= 0.0);
    }
    assert!(lines[4].starts_with("Total (G.M): "));
}

#[test]
fn missing_source_fails_without_total() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    fs::remove_file(dir.path().join("citylots.json")).unwrap();

    let output = bench(dir.path());
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Total (G.M):"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("citylots.json"));
}

#[test]
fn truncated_source_fails_with_parse_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    fs::write(dir.path().join("twitter.json"), r#"{"statuses": [{"id": 50587"#).unwrap();

    let output = bench(dir.path());
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(!stdout.contains("Total (G.M):"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot parse twitter"));
}

#[test]
fn failure_is_reported_once_with_logging_enabled() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    fs::remove_file(dir.path().join("citylots.json")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_serde"))
        .arg(dir.path())
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("citylots.json").count(), 1);
    assert!(stderr.starts_with("error: cannot read "));
}
