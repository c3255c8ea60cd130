use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_fit_counts_greedily() {
    let label = "x".repeat(40);
    cargo_bin_cmd!("pillbar")
        .args([
            "fit", "--label", &label, "--label", &label, "--label", &label, "--width", "200",
            "--overhead", "50",
        ])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_fit_reports_all_when_everything_fits() {
    let label = "x".repeat(40);
    cargo_bin_cmd!("pillbar")
        .args([
            "fit", "--label", &label, "--label", &label, "--label", &label, "--width", "300",
            "--overhead", "50",
        ])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_fit_floors_at_one() {
    let label = "x".repeat(80);
    cargo_bin_cmd!("pillbar")
        .args(["fit", "--label", &label, "--width", "20"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_fit_suffix_reserves_width() {
    let label = "x".repeat(10);
    cargo_bin_cmd!("pillbar")
        .args([
            "fit",
            "--label",
            &label,
            "--label",
            &label,
            "--width",
            "25",
            "--overhead",
            "2",
        ])
        .assert()
        .success()
        .stdout("2\n");

    cargo_bin_cmd!("pillbar")
        .args([
            "fit",
            "--label",
            &label,
            "--label",
            &label,
            "--width",
            "25",
            "--suffix",
            "2",
            "--overhead",
            "2",
        ])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_fit_json_output() {
    let label = "x".repeat(40);
    cargo_bin_cmd!("pillbar")
        .args([
            "fit", "--label", &label, "--label", &label, "--label", &label, "--width", "200",
            "--overhead", "50", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shown\":2"))
        .stdout(predicate::str::contains("\"hidden\":1"))
        .stdout(predicate::str::contains("\"total\":3"));
}

/// Pixel mode swaps in font metrics and the larger per-pill overhead.
#[test]
fn test_fit_px_mode_uses_font_metrics() {
    cargo_bin_cmd!("pillbar")
        .args([
            "fit", "--label", "mmmm", "--label", "mmmm", "--label", "mmmm", "--width", "200",
            "--px",
        ])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_fit_requires_labels() {
    cargo_bin_cmd!("pillbar")
        .args(["fit", "--width", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--label"));
}
