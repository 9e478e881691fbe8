#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// WPT setter suite (`setters_tests.json`)
use super::wpt_loader::load_setter_tests;
use super::wpt_runner::run_setter_tests;

#[test]
fn test_wpt_setters_suite() {
    let groups = load_setter_tests();
    let result = run_setter_tests(
        groups
            .iter()
            .map(|(setter, tests)| (setter.as_str(), tests.as_slice())),
    );
    result.report(20);

    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(groups.len() >= 9, "every setter should have test data");
}
