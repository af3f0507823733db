//! E2E tests for browsing: ls, tree and crumbs

use predicates::prelude::*;

use super::Fixture;

#[test]
fn ls_root_lists_folders_first() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .assert()
        .success()
        .stdout("docs/\nmusic/\na.png\n");
}

#[test]
fn ls_with_cursor() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .args(["--cursor", "media/docs"])
        .assert()
        .success()
        .stdout("sub/\nb.pdf\n");
}

#[test]
fn ls_unknown_folder_is_empty() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .args(["-c", "media/nowhere/"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn ls_json_includes_entries_and_breadcrumbs() {
    let fx = Fixture::new();
    let output = fx
        .mtree()
        .arg("ls")
        .arg(&fx.listing)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cursor"], "media/");
    assert_eq!(value["entries"].as_array().unwrap().len(), 3);
    assert_eq!(value["entries"][2]["name"], "a.png");
    assert_eq!(value["entries"][2]["fileKind"], "image");
    assert_eq!(value["breadcrumbs"][0]["label"], "Home");
}

#[test]
fn tree_prints_whole_hierarchy() {
    let fx = Fixture::new();
    let expected = "\
media/
├── docs/
│   ├── sub/
│   │   └── c.txt
│   └── b.pdf
├── music/
│   └── song
└── a.png
";
    fx.mtree()
        .arg("tree")
        .arg(&fx.listing)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn tree_depth_limit() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("tree")
        .arg(&fx.listing)
        .args(["--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/"))
        .stdout(predicate::str::contains("b.pdf").not());
}

#[test]
fn tree_never_shows_hidden_or_stray_records() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("tree")
        .arg(&fx.listing)
        .assert()
        .success()
        .stdout(predicate::str::contains("emptyFolderPlaceholder").not())
        .stdout(predicate::str::contains("stray.png").not());
}

#[test]
fn crumbs_for_nested_cursor() {
    Fixture::new()
        .mtree()
        .args(["crumbs", "media/docs/sub"])
        .assert()
        .success()
        .stdout("Home\tmedia/\ndocs\tmedia/docs/\nsub\tmedia/docs/sub/\n");
}

#[test]
fn crumbs_json() {
    Fixture::new()
        .mtree()
        .args(["crumbs", "media/docs/", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"navigateTo\": \"media/docs/\""));
}
