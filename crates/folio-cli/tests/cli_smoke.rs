use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("decks").join("report.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_lists_pages() {
    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = Command::new(exe)
        .args(["pages", fixture().to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json = stdout_json(&output);
    let pages = json["pages"].as_array().expect("pages");
    assert_eq!(pages.len(), 16);
    assert_eq!(pages[0]["renderer"], "hero");
    assert_eq!(pages[3]["chart"], "PIE");
    assert_eq!(pages[3]["template"], "SPLIT_RIGHT");
    assert_eq!(pages[15]["type"], "VISUAL_FOCUS");
    assert_eq!(json["sections"].as_array().map(Vec::len), Some(4));
}

#[test]
fn cli_dumps_page_geometry_with_config_overrides() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{ "radar": { "radius": 100 } }"#).expect("write config");

    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = Command::new(exe)
        .args([
            "geometry",
            "--page",
            "7",
            "--config",
            config.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "radar");
    assert_eq!(json["radius"], 100.0);
    assert_eq!(json["series"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_renders_svg_to_stdout() {
    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = Command::new(exe)
        .args(["render", "--page", "3", fixture().to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"id="page-3""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn cli_renders_png_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("pie.png");

    let exe = assert_cmd::cargo_bin!("folio-cli");
    Command::new(exe)
        .args([
            "render",
            "--page",
            "3",
            "--format",
            "png",
            "--background",
            "white",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
}

#[test]
fn cli_renders_png_next_to_the_deck_by_default() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let deck = tmp.path().join("report.json");
    fs::copy(fixture(), &deck).expect("copy fixture");

    let exe = assert_cmd::cargo_bin!("folio-cli");
    Command::new(exe)
        .args([
            "render",
            "--page",
            "8",
            "--format",
            "png",
            deck.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    assert!(tmp.path().join("report-8.png").exists());
}

#[test]
fn cli_reports_pages_without_charts() {
    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = Command::new(exe)
        .args(["render", "--page", "0", fixture().to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(3));

    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = Command::new(exe)
        .args(["render", "--page", "9", fixture().to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no page with id 9"));
}

#[test]
fn cli_rejects_unknown_flags() {
    let exe = assert_cmd::cargo_bin!("folio-cli");
    Command::new(exe)
        .args(["pages", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn cli_present_steps_through_the_deck() {
    let exe = assert_cmd::cargo_bin!("folio-cli");
    let output = assert_cmd::Command::new(exe)
        .args(["present", fixture().to_string_lossy().as_ref()])
        .write_stdin("right\nright\nleft\ngoto 8\ntoggle 2\ngoto 99\nleft\nright\nhome\nleft\nquit\nright\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("status line"))
        .collect();
    let ids: Vec<i64> = lines.iter().map(|l| l["id"].as_i64().expect("id")).collect();
    assert_eq!(ids, vec![0, 1, 2, 1, 8, 8, 8, 7, 8, 0, 0]);

    assert_eq!(lines[0]["progress"], "00/15");
    let bullet = &lines[1]["bullets"][0];
    assert_eq!(bullet["lead"], "Retention");
    assert_eq!(bullet["spans"][0], serde_json::json!({ "kind": "strong", "text": "62%" }));
    assert_eq!(lines[2]["bullets"][1]["sub"], "Community levels account for a third of play time.");
    assert_eq!(lines[4]["chart"], "flywheel");
    assert_eq!(lines[4]["section"], "Product");
    assert_eq!(lines[4]["expanded"], serde_json::json!([0]));
    assert_eq!(lines[5]["expanded"], serde_json::json!([2]));
    assert_eq!(lines[6]["accepted"], false);
    // Leaving the page and coming back resets the selection.
    assert_eq!(lines[8]["expanded"], serde_json::json!([0]));
    assert_eq!(lines[10]["accepted"], false);
    assert_eq!(lines[10]["can_prev"], false);
}
