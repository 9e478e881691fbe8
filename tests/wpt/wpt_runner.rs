use super::wpt_loader::{SetterTest, TestCase, UrlTest, WptFailure, WptTestResult};
/// WPT test runner
///
/// Runs the WHATWG URL test data against `urlengine::Url`
use urlengine::Url;

/// Getter values of `url`, keyed by the names used in the test data
fn field(url: &Url, name: &str) -> Option<String> {
    let value = match name {
        "href" => url.href(),
        "protocol" => url.protocol(),
        "username" => url.username(),
        "password" => url.password(),
        "host" => url.host(),
        "hostname" => url.hostname(),
        "port" => url.port(),
        "pathname" => url.pathname(),
        "search" => url.search(),
        "hash" => url.hash(),
        "origin" => return Some(url.origin()),
        _ => return None,
    };
    Some(value.to_string())
}

fn expectations(test: &UrlTest) -> [(&'static str, Option<&str>); 11] {
    [
        ("href", test.href.as_deref()),
        ("protocol", test.protocol.as_deref()),
        ("username", test.username.as_deref()),
        ("password", test.password.as_deref()),
        ("host", test.host.as_deref()),
        ("hostname", test.hostname.as_deref()),
        ("port", test.port.as_deref()),
        ("pathname", test.pathname.as_deref()),
        ("search", test.search.as_deref()),
        ("hash", test.hash.as_deref()),
        ("origin", test.origin.as_deref()),
    ]
}

/// Run parsing tests and return results
pub fn run_wpt_tests(tests: Vec<TestCase>) -> WptTestResult {
    let mut result = WptTestResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest(test) = test else {
            continue;
        };
        test_num += 1;

        let failure = |field: &str, expected: &str, actual: &str| WptFailure {
            test_num,
            input: test.input.clone(),
            base: test.base.clone(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        };

        let parsed = Url::parse(&test.input, test.base.as_deref());
        let url = match (parsed, test.failure) {
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (Ok(_), true) => {
                result.failed += 1;
                result.failures.push(failure("parsing", "failure", "success"));
                continue;
            }
            (Err(error), false) => {
                result.failed += 1;
                result
                    .failures
                    .push(failure("parsing", "success", &error.to_string()));
                continue;
            }
            (Ok(url), false) => url,
        };

        let mut test_passed = true;
        for (name, expected) in expectations(&test) {
            let Some(expected) = expected else {
                continue;
            };
            let actual = field(&url, name).unwrap_or_default();
            if actual != expected {
                result.failures.push(failure(name, expected, &actual));
                test_passed = false;
            }
        }

        // A URL must survive its own serialization
        if test_passed {
            let reparsed = Url::parse(url.href(), None);
            if reparsed.as_ref().map(Url::href) != Ok(url.href()) {
                result.failures.push(failure("reparse", url.href(), "different href"));
                test_passed = false;
            }
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

/// Apply one setter by name
fn apply_setter(url: &mut Url, setter: &str, value: &str) {
    match setter {
        "protocol" => {
            url.set_protocol(value);
        }
        "username" => {
            url.set_username(value);
        }
        "password" => {
            url.set_password(value);
        }
        "host" => {
            url.set_host(value);
        }
        "hostname" => {
            url.set_hostname(value);
        }
        "port" => {
            url.set_port(value);
        }
        "pathname" => {
            url.set_pathname(value);
        }
        "search" => url.set_search(value),
        "hash" => url.set_hash(value),
        other => panic!("unknown setter {other}"),
    }
}

/// Run setter tests: parse `href`, assign `new_value`, compare getters
pub fn run_setter_tests<'a>(
    groups: impl IntoIterator<Item = (&'a str, &'a [SetterTest])>,
) -> WptTestResult {
    let mut result = WptTestResult::default();
    let mut test_num = 0;

    for (setter, tests) in groups {
        for test in tests {
            test_num += 1;
            let mut url = match Url::parse(&test.href, None) {
                Ok(url) => url,
                Err(error) => {
                    result.failed += 1;
                    result.failures.push(WptFailure {
                        test_num,
                        input: test.href.clone(),
                        base: None,
                        field: "parsing".to_string(),
                        expected: "success".to_string(),
                        actual: error.to_string(),
                    });
                    continue;
                }
            };
            apply_setter(&mut url, setter, &test.new_value);

            let mut test_passed = true;
            for (name, expected) in &test.expected {
                let actual = field(&url, name).unwrap_or_default();
                if &actual != expected {
                    result.failures.push(WptFailure {
                        test_num,
                        input: format!("{} <- {setter} = {:?}", test.href, test.new_value),
                        base: None,
                        field: name.clone(),
                        expected: expected.clone(),
                        actual,
                    });
                    test_passed = false;
                }
            }

            if test_passed {
                result.passed += 1;
            } else {
                result.failed += 1;
            }
        }
    }

    result
}
