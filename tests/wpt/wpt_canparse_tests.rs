/// WPT tests for `Url::can_parse`
///
/// Based on: https://github.com/web-platform-tests/wpt/blob/master/url/url-statics-canparse.any.js
use urlengine::Url;

/// `(input, base, expected)`; an absent input is the empty string
const CAN_PARSE_TESTS: &[(Option<&str>, Option<&str>, bool)] = &[
    (None, None, false),
    (Some("aaa:b"), None, true),
    (None, Some("aaa:b"), false),
    (None, Some("https://test:test/"), false),
    (Some("aaa:/b"), None, true),
    (None, Some("aaa:/b"), true),
    (Some("https://test:test"), None, false),
    (Some("a"), Some("https://b/"), true),
];

#[test]
fn test_wpt_canparse_suite() {
    let failures: Vec<String> = CAN_PARSE_TESTS
        .iter()
        .enumerate()
        .filter_map(|(idx, &(input, base, expected))| {
            let result = Url::can_parse(input.unwrap_or(""), base);
            (result != expected).then(|| {
                format!("Test {idx}: can_parse({input:?}, {base:?}) = {result} (expected {expected})")
            })
        })
        .collect();

    for failure in &failures {
        eprintln!("  {failure}");
    }

    assert!(
        failures.is_empty(),
        "Failed {} of {} can_parse WPT tests",
        failures.len(),
        CAN_PARSE_TESTS.len()
    );
}
