//! E2E tests for deletion planning and execution

use predicates::prelude::*;
use std::fs;

use super::Fixture;

#[test]
fn plan_folder_covers_whole_subtree() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media/docs"])
        .assert()
        .success()
        .stdout("b\nc\n");
}

#[test]
fn plan_ids_pass_through() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--ids", "b,zz"])
        .assert()
        .success()
        .stdout("b\nzz\n");
}

#[test]
fn plan_requires_a_target() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--folder or --ids"));
}

#[test]
fn plan_rejects_both_targets() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media/docs", "--ids", "a"])
        .assert()
        .code(3);
}

#[test]
fn deleting_media_root_is_refused() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media/"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("media root"));
}

#[test]
fn deleting_media_root_when_allowed() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media", "--allow-root-delete"])
        .assert()
        .success()
        .stdout("a\nb\nc\nd\np\n");
}

#[test]
fn plan_without_execute_leaves_listing_untouched() {
    let fx = Fixture::new();
    let before = fs::read_to_string(&fx.listing).unwrap();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media/docs"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&fx.listing).unwrap(), before);
}

#[test]
fn execute_rewrites_listing() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--folder", "media/docs", "--execute"])
        .assert()
        .success()
        .stdout("b\nc\n");

    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .assert()
        .success()
        .stdout("music/\na.png\n");
}

#[test]
fn plan_json() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("plan-delete")
        .arg(&fx.listing)
        .args(["--ids", "a", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ids\""));
}
