//! Tests for equality.

mod components;
mod utils;

use xri::compare::{equal, EqualityOptions};
use xri::spec::{IriSpec, UriSpec};

use self::components::TEST_CASES;

#[test]
fn http_and_https_with_trailing_slash() {
    let options = EqualityOptions {
        http_equals_https: true,
        ignore_trailing_slash: true,
    };
    assert!(equal::<IriSpec>("https://example.com/a", "http://example.com/a/", options)
        .expect("valid references"));
    assert!(equal::<UriSpec>(b"https://example.com/a", b"http://example.com/a/", options)
        .expect("valid references"));
}

#[test]
fn every_case_equals_itself() {
    for case in TEST_CASES {
        assert!(
            equal::<IriSpec>(case.composed, case.composed, EqualityOptions::default())
                .expect("test cases are valid"),
            "{}",
            case.name
        );
    }
}

#[test]
fn different_cases_are_different() {
    for (i, a) in TEST_CASES.iter().enumerate() {
        for b in &TEST_CASES[(i + 1)..] {
            assert!(
                !equal::<IriSpec>(a.composed, b.composed, EqualityOptions::default())
                    .expect("test cases are valid"),
                "{} vs {}",
                a.name,
                b.name
            );
        }
    }
}

#[test]
fn each_component_matters() {
    let options = EqualityOptions::new()
        .http_equals_https(true)
        .ignore_trailing_slash(true);
    let base = "http://u@h:1/p/?q#f";
    for other in [
        "ftp://u@h:1/p/?q#f",
        "http://h:1/p/?q#f",
        "http://u@h:1/q/?q#f",
        "http://u@h:1/p/?r#f",
        "http://u@h:1/p/?q#g",
        "http://u@h:1/p/?q",
        "http://u@h:1/p/#f",
    ] {
        assert!(
            !equal::<IriSpec>(base, other, options).expect("valid references"),
            "{:?}",
            other
        );
    }
}

#[test]
fn unparsable_side_is_an_error() {
    let options = EqualityOptions::default();
    assert!(equal::<IriSpec>("http://a/", "-http://a/", options).is_err());
    assert!(equal::<UriSpec>(b"#%x", b"#x", options).is_err());
}
