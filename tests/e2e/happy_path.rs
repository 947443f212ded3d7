use super::*;

#[test]
fn scanner_receives_the_documented_argument_order() {
    let ctx = TestContext::new();
    ctx.write_file("suppressions.xml", "<suppressions/>");

    let mut inputs = base_inputs();
    inputs.push(("report_formats", "HTML|JSON"));
    inputs.push(("suppression_file", "suppressions.xml"));
    inputs.push(("fail_on_cvss", "7"));
    inputs.push(("enable_experimental_analyzers", "true"));
    inputs.push(("data_path", "db"));

    let result = ctx.run_step(&inputs);
    assert_success(&result);

    let root = ctx.canonical_path();
    let expected = vec![
        "--project".to_string(),
        "acme-app".to_string(),
        "--scan".to_string(),
        ".".to_string(),
        "--enableExperimental".to_string(),
        "--failOnCVSS".to_string(),
        "7".to_string(),
        "--suppression".to_string(),
        "suppressions.xml".to_string(),
        "--data".to_string(),
        root.join("db").display().to_string(),
        "--out".to_string(),
        root.display().to_string(),
        "--format".to_string(),
        "HTML".to_string(),
        "--format".to_string(),
        "JSON".to_string(),
    ];

    assert_eq!(ctx.scanner_args().expect("scanner never ran"), expected);
}

#[test]
fn generated_reports_are_exported_for_later_steps() {
    let ctx = TestContext::new();

    let mut inputs = base_inputs();
    inputs.push(("report_formats", "HTML|JSON"));
    inputs.push((
        "FAKE_SCANNER_REPORTS",
        "dependency-check-report.html dependency-check-report.json",
    ));

    let result = ctx.run_step(&inputs);
    assert_success(&result);

    let log = ctx.envman_log();
    let root = ctx.canonical_path();

    assert!(log.contains("DEPENDENCY_CHECK_HTML_REPORT_PATH"));
    assert!(log.contains(&root.join("dependency-check-report.html").display().to_string()));
    assert!(log.contains("DEPENDENCY_CHECK_JSON_REPORT_PATH"));
    assert!(!log.contains("DEPENDENCY_CHECK_XML_REPORT_PATH"));
}

#[test]
fn reports_present_on_disk_are_exported_even_when_not_requested() {
    // The publisher walks the whole table; whatever the scanner wrote
    // gets exported, requested or not.
    let ctx = TestContext::new();

    let mut inputs = base_inputs();
    inputs.push((
        "FAKE_SCANNER_REPORTS",
        "dependency-check-report.html dependency-check-report.xml",
    ));

    let result = ctx.run_step(&inputs);
    assert_success(&result);

    let log = ctx.envman_log();
    assert!(log.contains("DEPENDENCY_CHECK_HTML_REPORT_PATH"));
    assert!(log.contains("DEPENDENCY_CHECK_XML_REPORT_PATH"));
}

#[test]
fn findings_do_not_fail_the_step_by_default() {
    let ctx = TestContext::new();

    let mut inputs = base_inputs();
    inputs.push(("FAKE_SCANNER_EXIT", "13"));

    let result = ctx.run_step(&inputs);

    assert_exit_code(&result, 0);
}

#[test]
fn findings_fail_the_step_when_configured_to() {
    let ctx = TestContext::new();

    let mut inputs = base_inputs();
    inputs.push(("fail_step_if_vulnerability_found", "true"));
    inputs.push(("FAKE_SCANNER_EXIT", "13"));
    inputs.push(("FAKE_SCANNER_REPORTS", "dependency-check-report.html"));

    let result = ctx.run_step(&inputs);

    assert_exit_code(&result, 13);
    // The failing scan's reports are exactly what later steps want.
    assert!(ctx.envman_log().contains("DEPENDENCY_CHECK_HTML_REPORT_PATH"));
}

#[test]
fn database_caching_registers_the_resolved_path() {
    let ctx = TestContext::new();
    ctx.write_file("db/.keep", "");

    let mut inputs = base_inputs();
    inputs.push(("cache_database", "true"));
    inputs.push(("data_path", "db"));

    let result = ctx.run_step(&inputs);
    assert_success(&result);

    let log = ctx.envman_log();
    assert!(log.contains("BITRISE_CACHE_INCLUDE_PATHS"));
    assert!(log.contains(&ctx.canonical_path().join("db").display().to_string()));
}

#[test]
fn debug_input_logs_the_run_summary() {
    let ctx = TestContext::new();

    let mut inputs = base_inputs();
    inputs.push(("debug", "true"));

    let result = ctx.run_step(&inputs);

    assert_success(&result);
    assert!(
        result.stdout.contains("run summary"),
        "Expected the debug summary in stdout, got:\n{}",
        result.stdout
    );
}
