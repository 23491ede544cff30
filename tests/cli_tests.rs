//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use support::config::write_temp_config;

fn solid_lessons() -> Command {
    let mut cmd = cargo_bin_cmd!("solid-lessons");
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help() {
    solid_lessons()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("lessons"))
        .stdout(predicate::str::contains("discount"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    solid_lessons()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("solid-lessons"));
}

#[test]
fn test_run_all_lessons() {
    solid_lessons()
        .args(["run", "--no-banner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Single Responsibility Principle"))
        .stdout(predicate::str::contains("Open/Closed Principle"))
        .stdout(predicate::str::contains("Liskov Substitution Principle"))
        .stdout(predicate::str::contains("Interface Segregation Principle"))
        .stdout(predicate::str::contains("Dependency Inversion Principle"))
        .stdout(predicate::str::contains("no matching strategy"))
        .stdout(predicate::str::contains("Finished."));
}

#[test]
fn test_run_color_always_paints_banner_when_piped() {
    solid_lessons()
        .args(["--color", "always", "run", "--lesson", "lsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;2;"));
}

#[test]
fn test_run_selected_lesson() {
    solid_lessons()
        .args(["run", "--no-banner", "--lesson", "lsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expected 20"))
        .stdout(predicate::str::contains("Open/Closed Principle").not());
}

#[test]
fn test_run_unknown_lesson_fails() {
    solid_lessons()
        .args(["run", "--lesson", "kiss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for lesson"));
}

#[test]
fn test_run_json_emits_lines() {
    solid_lessons()
        .args(["--json", "run", "--lesson", "ocp"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"section""#))
        .stdout(predicate::str::contains(r#""type":"field""#));
}

#[test]
fn test_run_quiet_prints_nothing() {
    solid_lessons()
        .args(["-q", "run"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_run_pause_waits_at_start_and_end() {
    solid_lessons()
        .args(["run", "--no-banner", "--pause", "--lesson", "lsp"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to start"))
        .stdout(predicate::str::contains("Press Enter to exit"))
        .stdout(predicate::str::contains("Starting.").not());
}

#[test]
fn test_run_pause_from_config() {
    let file = write_temp_config("[runner]\npause = true\nlessons = [\"isp\"]\n");
    solid_lessons()
        .args(["run", "--no-banner", "--config"])
        .arg(&file.path)
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to start"));
}

#[test]
fn test_run_pause_is_skipped_in_json_mode() {
    solid_lessons()
        .args(["--json", "run", "--pause", "--lesson", "lsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn test_run_pause_is_skipped_in_quiet_mode() {
    solid_lessons()
        .args(["-q", "run", "--pause"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_run_with_config_selection() {
    let file = write_temp_config("[runner]\nlessons = [\"dip\"]\n");
    solid_lessons()
        .args(["run", "--no-banner", "--config"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency Inversion Principle"))
        .stdout(predicate::str::contains("Single Responsibility Principle").not());
}

#[test]
fn test_lessons_list() {
    solid_lessons()
        .args(["lessons", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("srp"))
        .stdout(predicate::str::contains("ocp"))
        .stdout(predicate::str::contains("lsp"))
        .stdout(predicate::str::contains("isp"))
        .stdout(predicate::str::contains("dip"));
}

#[test]
fn test_lessons_explain_accepts_name() {
    solid_lessons()
        .args(["lessons", "explain", "open-closed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DiscountCalculator"));
}

#[test]
fn test_lessons_explain_unknown_hints() {
    solid_lessons()
        .args(["lessons", "explain", "yagni"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown lesson: yagni"))
        .stdout(predicate::str::contains("available lessons"));
}

#[test]
fn test_discount_compute_vip() {
    solid_lessons()
        .args(["discount", "compute", "vip", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15"))
        .stdout(predicate::str::contains("15.00").not());
}

#[test]
fn test_discount_compute_quiet_prints_amount_only() {
    solid_lessons()
        .args(["-q", "discount", "compute", "VIP", "100"])
        .assert()
        .success()
        .stdout(predicate::str::diff("15\n"));
}

#[test]
fn test_discount_compute_unknown_category() {
    solid_lessons()
        .args(["discount", "compute", "wholesale", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no matching strategy"));
}

#[test]
fn test_discount_compute_rejects_negative_amount() {
    solid_lessons()
        .args(["discount", "compute", "vip", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));
}

#[test]
fn test_discount_compute_json() {
    solid_lessons()
        .args(["--json", "discount", "compute", "student", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"no_matching_strategy""#));
}

#[test]
fn test_discount_compute_with_configured_category() {
    let file = write_temp_config("[[discounts.categories]]\nkey = \"student\"\nrate = 0.2\n");
    solid_lessons()
        .args(["-q", "discount", "compute", "student", "50", "--config"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_discount_list() {
    solid_lessons()
        .args(["discount", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regular"))
        .stdout(predicate::str::contains("premium"))
        .stdout(predicate::str::contains("vip"));
}

#[test]
fn test_config_validate_ok() {
    let file = write_temp_config("[logging]\nlevel = \"info\"\n");
    solid_lessons()
        .args(["config", "validate"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_config_validate_rejects_invalid_rate() {
    let file = write_temp_config("[[discounts.categories]]\nkey = \"all\"\nrate = 1.5\n");
    solid_lessons()
        .args(["config", "validate"])
        .arg(&file.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("discounts.categories.rate"));
}

#[test]
fn test_config_validate_rejects_empty_key() {
    let file = write_temp_config("[[discounts.categories]]\nkey = \" \"\nrate = 0.1\n");
    solid_lessons()
        .args(["config", "validate"])
        .arg(&file.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("discount category must not be empty"));
}

#[test]
fn test_config_validate_missing_file() {
    solid_lessons()
        .args(["config", "validate", "/nonexistent/solid-lessons.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_config_show() {
    let file = write_temp_config("[[discounts.categories]]\nkey = \"student\"\nrate = 0.2\n");
    solid_lessons()
        .args(["config", "show"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("student"))
        .stdout(predicate::str::contains("20%"));
}
