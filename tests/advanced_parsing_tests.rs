//! Advanced URL parsing tests
//!
//! Internationalized domain names, IPv4 and IPv6 host forms, percent
//! encoding and validation error reporting.

#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use std::cell::RefCell;
use urlengine::{ParseError, Url, ValidationError};

fn parse(input: &str, base: Option<&str>) -> Result<Url, ParseError> {
    Url::parse(input, base)
}

#[test]
fn test_percent_encoded_dots_normalization() {
    for (input, pathname) in [
        ("http://example.com/a/%2e/b", "/a/b"),
        ("http://example.com/a/%2E%2e/b", "/b"),
        ("http://example.com/a/.%2e/b", "/b"),
        ("http://example.com/a/b/..", "/a/"),
        ("http://example.com/a/b/.", "/a/b/"),
    ] {
        assert_eq!(parse(input, None).unwrap().pathname(), pathname, "{input}");
    }
}

#[test]
fn test_invalid_hostname_characters() {
    for input in [
        "http://exa mple.com/",
        "http://exa<mple.com/",
        "http://exa>mple.com/",
        "http://exa^mple.com/",
        "http://exa|mple.com/",
        "http://exa%00mple.com/",
        "http://%zz/",
    ] {
        assert_eq!(
            parse(input, None).unwrap_err(),
            ParseError::InvalidHost,
            "{input}"
        );
    }
}

#[test]
fn test_percent_decoded_host() {
    let url = parse("http://%65xample.com/", None).unwrap();
    assert_eq!(url.hostname(), "example.com");
}

#[test]
fn test_opaque_host_encoding() {
    let url = parse("foo://ex ample/", None);
    assert!(url.is_err());

    let url = parse("foo://exämple/", None).unwrap();
    assert_eq!(url.hostname(), "ex%C3%A4mple");
}

#[test]
fn test_ipv4_forms() {
    for (input, hostname) in [
        ("http://192.168.0.1/", "192.168.0.1"),
        ("http://0xC0.0250.0.1/", "192.168.0.1"),
        ("http://3232235521/", "192.168.0.1"),
        ("http://192.168.1/", "192.168.0.1"),
        ("http://192.11010049/", "192.168.0.1"),
        ("http://0x7f.1/", "127.0.0.1"),
        ("http://1.2.3.4./", "1.2.3.4"),
    ] {
        assert_eq!(parse(input, None).unwrap().hostname(), hostname, "{input}");
    }
}

#[test]
fn test_ipv4_failures() {
    for input in [
        "http://1.2.3.256/",
        "http://4294967296/",
        "http://1.2.3.4.5/",
        "http://0x100.0.0.1/",
        "http://1.2.3.09/",
    ] {
        assert!(parse(input, None).is_err(), "{input}");
    }
}

#[test]
fn test_non_numeric_last_label_is_a_domain() {
    let url = parse("http://1.2.3.example/", None).unwrap();
    assert_eq!(url.hostname(), "1.2.3.example");
}

#[test]
fn test_ipv6_forms() {
    for (input, host) in [
        ("http://[::1]/", "[::1]"),
        ("http://[0:0:0:0:0:0:0:1]/", "[::1]"),
        ("http://[2001:DB8::1]/", "[2001:db8::1]"),
        ("http://[1:0:0:2:0:0:0:3]/", "[1:0:0:2::3]"),
        ("http://[1:0::2]:8080/", "[1::2]:8080"),
        ("http://[::ffff:192.168.0.1]/", "[::ffff:c0a8:1]"),
        ("http://[::]/", "[::]"),
        ("http://[1:2:3:4:5:6:7:0]/", "[1:2:3:4:5:6:7:0]"),
    ] {
        assert_eq!(parse(input, None).unwrap().host(), host, "{input}");
    }
}

#[test]
fn test_ipv6_failures() {
    for input in [
        "http://[::1::]/",
        "http://[1:2:3:4:5:6:7:8:9]/",
        "http://[1:2:3:4:5:6:7]/",
        "http://[::1.2.3]/",
        "http://[::1.2.3.256]/",
        "http://[g::1]/",
        "http://[:1]/",
    ] {
        assert!(parse(input, None).is_err(), "{input}");
    }
}

#[test]
fn test_path_with_special_characters() {
    let url = parse("http://example.com/path;param=1/a:b@c!$&'()*+,=", None).unwrap();
    assert_eq!(url.pathname(), "/path;param=1/a:b@c!$&'()*+,=");

    let url = parse("http://example.com/ümlaut", None).unwrap();
    assert_eq!(url.pathname(), "/%C3%BCmlaut");
}

#[test]
fn test_edge_cases() {
    let url = parse("http://example.com/path/", None).unwrap();
    assert_eq!(url.pathname(), "/path/");

    // Multiple consecutive slashes in path
    let url = parse("http://example.com//path//", None).unwrap();
    assert_eq!(url.pathname(), "//path//");

    // Extra slashes before the host are skipped for special schemes
    let url = parse("http:////example.com/", None).unwrap();
    assert_eq!(url.href(), "http://example.com/");

    // but not for others
    let url = parse("foo:////example.com/", None).unwrap();
    assert_eq!(url.href(), "foo:////example.com/");
    assert_eq!(url.host(), "");
}

#[test]
fn test_japanese_domain_names() {
    // Japanese government domain: 総務省.jp → xn--lhr645fjve.jp
    let url = parse("https://総務省.jp/", None).unwrap();
    assert_eq!(url.host(), "xn--lhr645fjve.jp");
    assert_eq!(url.href(), "https://xn--lhr645fjve.jp/");

    let url = parse("http://user:pass@総務省.jp:8080/", None).unwrap();
    assert_eq!(url.host(), "xn--lhr645fjve.jp:8080");
    assert_eq!(url.username(), "user");
}

#[test]
fn test_unicode_domain_idna_processing() {
    let url = parse("http://münchen.de/", None).unwrap();
    assert_eq!(url.host(), "xn--mnchen-3ya.de");

    let url = parse("http://café.fr/", None).unwrap();
    assert_eq!(url.host(), "xn--caf-dma.fr");

    // Already encoded Punycode should pass through
    let url = parse("http://XN--wgv71a.jp/", None).unwrap();
    assert_eq!(url.host(), "xn--wgv71a.jp");

    // Full-width characters map to ASCII
    let url = parse("http://ｅｘａｍｐｌｅ.com/", None).unwrap();
    assert_eq!(url.host(), "example.com");
}

#[test]
fn test_domain_helpers() {
    assert_eq!(urlengine::domain_to_ascii("münchen.de"), "xn--mnchen-3ya.de");
    assert_eq!(urlengine::domain_to_unicode("xn--mnchen-3ya.de"), "münchen.de");
    assert_eq!(urlengine::domain_to_ascii("exa mple"), "");
}

#[test]
fn test_validation_errors_reported() {
    let seen = RefCell::new(Vec::new());
    let record = |error: ValidationError| seen.borrow_mut().push(error);

    let url = Url::options()
        .on_validation_error(&record)
        .parse(" http:\\\\user@example.com\\a\tb")
        .unwrap();
    assert_eq!(url.href(), "http://user@example.com/ab");

    let seen = seen.into_inner();
    assert!(seen.contains(&ValidationError::C0ControlOrSpaceTrimmed));
    assert!(seen.contains(&ValidationError::TabOrNewlineIgnored));
    assert!(seen.contains(&ValidationError::MissingSolidus));
    assert!(seen.contains(&ValidationError::Backslash));
    assert!(seen.contains(&ValidationError::Credentials));
}

#[test]
fn test_no_validation_errors_for_clean_input() {
    let count = RefCell::new(0);
    let record = |_: ValidationError| *count.borrow_mut() += 1;

    Url::options()
        .on_validation_error(&record)
        .parse("https://example.com/a?b#c")
        .unwrap();
    assert_eq!(count.into_inner(), 0);
}

#[test]
fn test_options_with_base() {
    let base = parse("http://example.com/a/b", None).unwrap();
    let url = Url::options().base_url(Some(&base)).parse("c").unwrap();
    assert_eq!(url.href(), "http://example.com/a/c");

    assert!(Url::options().base_url(None).parse("c").is_err());
}
