//! カタログを読み込むコマンドの integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "name": "qingzhu",
    "type": "image",
    "items": [
      { "key": "qingzhu-Smile_Face", "val": "https://cdn.example.com/qingzhu/a.png" },
      { "key": "qingzhu-Cry", "val": "https://cdn.example.com/qingzhu/b.png" }
    ]
  },
  {
    "name": "mystery",
    "type": "image",
    "items": [
      { "key": "mystery-BigSmile", "val": "https://cdn.example.com/mystery/c.png" }
    ]
  }
]"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
    dir
}

/// 環境の設定ファイルやカタログ指定の影響を受けないコマンド
fn owo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("owo").unwrap();
    cmd.current_dir(dir)
        .env("OWO_CONFIG", dir.join("no-config.toml"))
        .env_remove("OWO_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_json_outputs_every_record() {
    let dir = workspace();
    let output = owo(dir.path())
        .args(["list", "--catalog", "catalog.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], "qingzhu-Smile_Face");
    assert_eq!(records[0]["name"], "Smile Face");
    assert_eq!(records[0]["categoryName"], "青竹");
    assert_eq!(records[2]["categoryName"], "mystery");
}

#[test]
fn list_filters_by_query_case_insensitively() {
    let dir = workspace();
    owo(dir.path())
        .args(["list", "--catalog", "catalog.json", "--simple", "--query", "SMILE"])
        .assert()
        .success()
        .stdout("qingzhu-Smile_Face\nmystery-BigSmile\n");
}

#[test]
fn list_filters_by_category() {
    let dir = workspace();
    owo(dir.path())
        .args(["list", "--catalog", "catalog.json", "--simple", "-c", "qingzhu"])
        .assert()
        .success()
        .stdout("qingzhu-Smile_Face\nqingzhu-Cry\n");
}

#[test]
fn list_reports_no_results() {
    let dir = workspace();
    owo(dir.path())
        .args(["list", "--catalog", "catalog.json", "--category", "liushen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No emoji matched"));
}

#[test]
fn catalog_from_env_var() {
    let dir = workspace();
    owo(dir.path())
        .env("OWO_CATALOG", "catalog.json")
        .args(["list", "--simple", "-q", "cry"])
        .assert()
        .success()
        .stdout("qingzhu-Cry\n");
}

#[test]
fn missing_catalog_is_load_failure() {
    let dir = workspace();
    owo(dir.path())
        .args(["list", "--catalog", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn malformed_catalog_is_load_failure() {
    let dir = workspace();
    std::fs::write(dir.path().join("bad.json"), "<html></html>").unwrap();
    owo(dir.path())
        .args(["list", "--catalog", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn categories_lists_sentinel_first() {
    let dir = workspace();
    let output = owo(dir.path())
        .args(["categories", "--catalog", "catalog.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["key"], "all");
    assert_eq!(rows[0]["count"], 3);
    assert_eq!(rows[1]["key"], "qingzhu");
    assert_eq!(rows[1]["count"], 2);
    assert_eq!(rows[2]["name"], "mystery");
}

#[test]
fn show_prints_preview() {
    let dir = workspace();
    owo(dir.path())
        .args(["show", "--catalog", "catalog.json", "qingzhu-Cry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cdn.example.com/qingzhu/b.png"));
}

#[test]
fn show_unknown_id_fails() {
    let dir = workspace();
    owo(dir.path())
        .args(["show", "--catalog", "catalog.json", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Emoji not found: nope"));
}

#[test]
fn generate_artalk_writes_catalog_readable_by_list() {
    let dir = workspace();
    let root = dir.path();
    std::fs::create_dir(root.join("blobcat")).unwrap();
    std::fs::write(root.join("blobcat").join("blobcat-Heart.png"), "").unwrap();

    owo(root)
        .args([
            "generate",
            "artalk",
            "blobcat",
            "--base-url",
            "https://cdn.example.com/owo",
            "--output",
            "out/artalk.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 emoji"));

    owo(root)
        .args(["list", "--catalog", "out/artalk.json", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"categoryName\": \"Blob Cat\""))
        .stdout(predicate::str::contains(
            "https://cdn.example.com/owo/blobcat/blobcat-Heart.png",
        ));
}
