//! Console output: formats, color, and logging.

use crate::prelude::*;

/// > -o json prints the results as a single JSON document
#[test]
fn json_output_lists_checks_in_order() {
    let site = Site::valid();

    let json = cli().pwd(site.path()).json().passes();

    let names: Vec<&str> = json
        .checks()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "file_structure",
            "html_content",
            "css_features",
            "responsive_design",
            "file_sizes",
            "external_dependencies",
        ]
    );
    assert_eq!(json.value()["passed"], true);
    assert!(json.value()["timestamp"].is_string());
}

/// > JSON mode still writes the report file
#[test]
fn json_output_writes_report() {
    let site = Site::valid();

    cli().pwd(site.path()).json().passes();

    assert!(site.path().join("deployment_validation_report.md").is_file());
}

/// > NO_COLOR disables color output
#[test]
fn no_color_env_disables_color() {
    let site = Site::valid();

    cli()
        .pwd(site.path())
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > --color forces color even when stdout is not a terminal
#[test]
fn color_flag_forces_color() {
    let site = Site::valid();

    cli()
        .pwd(site.path())
        .args(&["--color"])
        .env("NO_COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

/// > Failing runs list each failing check in the recommendations
#[test]
fn failing_run_lists_recommendations() {
    let site = Site::valid();
    site.remove("README.md");

    cli()
        .pwd(site.path())
        .fails()
        .stdout_has("FAIL README.md: missing")
        .stdout_has("- **file_structure**: ❌ FAIL")
        .stdout_has("- Fix file_structure issues")
        .stdout_has("Fix the issues above before deploying.");
}

/// > DEPLOYCHECK_LOG enables debug logging to stderr
#[test]
fn env_log_enables_debug() {
    let site = Site::valid();

    cli()
        .pwd(site.path())
        .env("DEPLOYCHECK_LOG", "debug")
        .passes()
        .stderr_has("DEBUG")
        .stdout_lacks("DEBUG");
}

/// > Logging is off by default
#[test]
fn logging_off_by_default() {
    let site = Site::valid();

    cli().pwd(site.path()).passes().stderr_lacks("DEBUG");
}
