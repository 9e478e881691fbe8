/// Test data types for the WPT URL suite
use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of `urltestdata.json`: either a test or a comment string
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    UrlTest(UrlTest),
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UrlTest {
    pub input: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub pathname: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub failure: bool,
}

/// One entry of `setters_tests.json`, grouped by setter name
#[derive(Debug, Deserialize, Clone)]
pub struct SetterTest {
    #[serde(default)]
    #[allow(dead_code)]
    pub comment: Option<String>,
    pub href: String,
    pub new_value: String,
    pub expected: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct WptTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<WptFailure>,
}

#[derive(Debug, Clone)]
pub struct WptFailure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl WptTestResult {
    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }

    /// Print the first `limit` failures for `--nocapture` runs
    pub fn report(&self, limit: usize) {
        println!("\n{}", self.summary());
        for (i, failure) in self.failures.iter().take(limit).enumerate() {
            println!("\n{}. Test #{}: {}", i + 1, failure.test_num, failure.field);
            println!("   Input: {}", failure.input);
            if let Some(base) = &failure.base {
                println!("   Base: {base}");
            }
            println!("   Expected: {}", failure.expected);
            println!("   Actual: {}", failure.actual);
        }
        if self.failures.len() > limit {
            println!("\n... and {} more failures", self.failures.len() - limit);
        }
    }
}

pub fn load_url_tests() -> Vec<TestCase> {
    serde_json::from_str(include_str!("urltestdata.json")).expect("Failed to parse WPT test data")
}

pub fn load_setter_tests() -> BTreeMap<String, Vec<SetterTest>> {
    serde_json::from_str(include_str!("setters_tests.json"))
        .expect("Failed to parse WPT setter data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpt_result() {
        let result = WptTestResult {
            passed: 80,
            failed: 20,
            failures: Vec::new(),
        };

        assert_eq!(result.pass_rate(), 80.0);
        assert!(result.summary().contains("80.00%"));
    }

    #[test]
    fn test_comments_are_skipped_by_the_loader() {
        let tests = load_url_tests();
        assert!(tests.iter().any(|t| matches!(t, TestCase::Comment(_))));
        assert!(tests.iter().any(|t| matches!(t, TestCase::UrlTest(_))));
    }
}
