#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Full WPT URL parsing suite
use super::wpt_loader::load_url_tests;
use super::wpt_runner::run_wpt_tests;

#[test]
fn test_full_wpt_suite() {
    let tests = load_url_tests();
    println!("\nRunning {} WPT entries...", tests.len());

    let result = run_wpt_tests(tests);
    result.report(20);

    assert_eq!(
        result.failed,
        0,
        "\n\nWPT Compliance Test Failed!\n\
         Passed: {}, Failed: {}, Pass Rate: {:.2}%\n\
         Run with `cargo test test_full_wpt_suite -- --nocapture` to see failure details.\n",
        result.passed,
        result.failed,
        result.pass_rate()
    );

    // Also verify the data set hasn't shrunk unexpectedly
    assert!(
        result.passed >= 80,
        "Expected at least 80 WPT tests, but found {}",
        result.passed
    );
}
