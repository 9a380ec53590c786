//! Per-check behavior observed through the JSON output.

use crate::prelude::*;

/// > A remote stylesheet is flagged, fails external_dependencies, and its
/// > URL appears verbatim on the console
#[test]
fn cdn_stylesheet_is_flagged() {
    let site = Site::valid();
    let document = deck(8).replace(
        "</head>",
        "<link rel=\"stylesheet\" href=\"https://cdn.example.com/style.css\">\n</head>",
    );
    site.file("index.html", &document);

    cli()
        .pwd(site.path())
        .fails()
        .stdout_has("https://cdn.example.com/style.css")
        .stdout_has("- Fix external_dependencies issues");

    let json = cli().pwd(site.path()).json().fails();
    assert!(!json.passed("external_dependencies"));
    assert!(json.passed("html_content"));
    assert!(json.passed("css_features"));
}

/// > Missing index.html fails structure and content checks without panicking
#[test]
fn missing_document_fails_content_checks() {
    let site = Site::valid();
    site.remove("index.html");

    let json = cli().pwd(site.path()).json().fails();

    for name in [
        "file_structure",
        "html_content",
        "css_features",
        "responsive_design",
    ] {
        assert!(!json.passed(name), "{name} should fail");
        assert!(json.check(name).get("error").is_none(), "{name} aborted");
    }
    assert!(json.passed("file_sizes"));
}

/// > Exactly 8 slides passes; 7 or 9 fails
#[yare::parameterized(
    seven = { 7, false },
    eight = { 8, true },
    nine = { 9, false },
)]
fn slide_count_must_match(slides: usize, ok: bool) {
    let site = Site::valid();
    site.file("index.html", &deck(slides));

    let json = if ok {
        cli().pwd(site.path()).json().passes()
    } else {
        cli().pwd(site.path()).json().fails()
    };

    assert_eq!(json.passed("html_content"), ok);
}

/// > Removing a single CSS feature flips only css_features
#[test]
fn missing_css_feature_fails_only_css() {
    let site = Site::valid();
    site.file("index.html", &deck(8).replace("@keyframes", "@font-feature-values"));

    let json = cli().pwd(site.path()).json().fails();

    assert!(!json.passed("css_features"));
    for name in ["file_structure", "html_content", "responsive_design", "external_dependencies"] {
        assert!(json.passed(name), "{name} should pass");
    }
}

/// > Missing optional files only warn
#[test]
fn missing_optional_files_warn() {
    let site = Site::valid();
    site.remove("deployment_test.js");

    cli()
        .pwd(site.path())
        .passes()
        .stdout_has("WARN deployment_test.js: missing (optional)");
}

/// > The census lists every top-level file with its exact byte length
#[test]
fn census_lists_top_level_files() {
    let site = Site::valid();
    site.file("assets/logo.svg", "<svg/>");

    let json = cli().pwd(site.path()).json().passes();
    let census = json.check("file_sizes");

    assert_eq!(census["informational"], true);
    let sizes = census["file_sizes"].as_object().unwrap();
    assert_eq!(sizes["README.md"], 7);
    assert_eq!(sizes[".nojekyll"], 0);
    assert_eq!(sizes["index.html"], deck(8).len() as u64);
    assert!(!sizes.contains_key("assets"));
    assert!(!sizes.contains_key("logo.svg"));
}
