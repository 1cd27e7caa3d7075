//! `iconpack check`: read-only verification with a non-zero exit when stale.

mod common;

use common::*;

#[test]
fn check_fails_on_pending_rename_without_changing_files() {
    let env = TestEnv::with_icons(&[BATTERY_LONG]);

    let result = env.run(&["check"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Icons are out of date"));
    assert!(result.stdout.contains("Pending renames (1):"));
    assert!(result.stdout.contains("+++ b/"));
    assert_eq!(env.icon_files(), vec![BATTERY_LONG]);
}

#[test]
fn check_passes_after_sync() {
    let env = TestEnv::with_icons(&[BATTERY_LONG, WIFI_LONG]);
    assert!(env.run(&["sync"]).success);

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Icons are up to date (2 icons)"));
}

#[test]
fn check_detects_hand_edited_manifest() {
    let env = TestEnv::with_icons(&["home.svg"]);
    assert!(env.run(&["sync"]).success);
    std::fs::write(
        env.icons_dir().join("icons.slint"),
        "export global Icons {\n}\n",
    )
    .unwrap();

    let result = env.run(&["check"]);

    assert!(!result.success);
    assert!(result
        .stdout
        .contains("+    out property <image> home: @image-url(\"home.svg\");"));
}

#[test]
fn check_json_reports_up_to_date_flag() {
    let env = TestEnv::with_icons(&["home.svg"]);

    let result = env.run(&["--json", "check"]);

    assert_eq!(result.exit_code, 1);
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["up_to_date"], false);
    assert_eq!(value["generate"]["status"], "would_write");
}
