//! E2E tests for views and classification

use super::Fixture;

#[test]
fn view_lists_visible_records_with_kind() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .assert()
        .success()
        .stdout(
            "media/a.png\timage\n\
             media/docs/b.pdf\tpdf\n\
             media/docs/sub/c.txt\tother\n\
             media/music/song\taudio\n",
        );
}

#[test]
fn view_document_category_is_complement_of_media() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--category", "document"])
        .assert()
        .success()
        .stdout("media/docs/b.pdf\tpdf\nmedia/docs/sub/c.txt\tother\n");
}

#[test]
fn view_search_by_owner_needs_flag() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--search", "DANA"])
        .assert()
        .success()
        .stdout("");

    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--search", "DANA", "--owner"])
        .assert()
        .success()
        .stdout("media/docs/sub/c.txt\tother\n");
}

#[test]
fn view_date_range_is_inclusive() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--to", "2024-03-05"])
        .assert()
        .success()
        .stdout("media/a.png\timage\nmedia/docs/b.pdf\tpdf\n");

    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--from", "2024-03-06"])
        .assert()
        .success()
        .stdout("media/docs/sub/c.txt\tother\nmedia/music/song\taudio\n");
}

#[test]
fn view_limit_and_pages() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--recent", "--limit", "1"])
        .assert()
        .success()
        .stdout("media/a.png\timage\n");

    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--per-page", "2", "--page", "2"])
        .assert()
        .success()
        .stdout("media/docs/sub/c.txt\tother\nmedia/music/song\taudio\n");
}

#[test]
fn view_json_page() {
    let fx = Fixture::new();
    let output = fx
        .mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--json", "--per-page", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["limit"], 3);
    assert_eq!(value["items"].as_array().unwrap().len(), 3);
    assert_eq!(value["items"][0]["category"], "image");
    assert_eq!(value["items"][0]["mimeType"], "image/png");
}

#[test]
fn classify_extension_wins_over_generic_mime() {
    Fixture::new()
        .mtree()
        .args([
            "classify",
            "--mime",
            "application/octet-stream",
            "--location",
            "report.xlsx",
            "--name",
            "report",
        ])
        .assert()
        .success()
        .stdout("excel\tdocument\n");
}

#[test]
fn classify_positional_location() {
    Fixture::new()
        .mtree()
        .args(["classify", "archive.zip"])
        .assert()
        .success()
        .stdout("zip\tarchive\n");
}

#[test]
fn classify_without_input_is_other() {
    Fixture::new()
        .mtree()
        .arg("classify")
        .assert()
        .success()
        .stdout("other\tother\n");
}
