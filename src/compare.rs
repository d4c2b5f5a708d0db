//! Equality of URI and IRI references.
//!
//! [`equal`] parses both sides and compares the five components. Plain
//! `==` on [`Components`] is the strict form of the same comparison, which
//! already ignores the case of the scheme and the percent-encoding of the
//! fragment.
//!
//! No other normalization is done: `%41` and `A` in a path are different, and
//! so are `example.com` and `EXAMPLE.COM` in an authority.

use crate::components::Components;
use crate::error::Error;
use crate::spec::internal::Text;
use crate::spec::Spec;

/// Relaxations for [`equal`].
///
/// Every relaxation is off by default.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EqualityOptions {
    /// Whether `https` is treated as `http`.
    pub http_equals_https: bool,
    /// Whether one trailing `/` of the path is ignored.
    pub ignore_trailing_slash: bool,
}

impl EqualityOptions {
    /// Creates options with every relaxation off.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `https` is treated as `http`.
    #[inline]
    #[must_use]
    pub fn http_equals_https(self, v: bool) -> Self {
        Self {
            http_equals_https: v,
            ..self
        }
    }

    /// Sets whether one trailing `/` of the path is ignored.
    #[inline]
    #[must_use]
    pub fn ignore_trailing_slash(self, v: bool) -> Self {
        Self {
            ignore_trailing_slash: v,
            ..self
        }
    }
}

/// Parses both references and compares them.
///
/// # Failures
///
/// Fails if either side cannot be parsed.
///
/// # Examples
///
/// ```
/// use xri::compare::{equal, EqualityOptions};
/// use xri::spec::IriSpec;
///
/// let a = "https://example.com/a";
/// let b = "http://example.com/a/";
/// assert!(!equal::<IriSpec>(a, b, EqualityOptions::new())?);
///
/// let relaxed = EqualityOptions::new()
///     .http_equals_https(true)
///     .ignore_trailing_slash(true);
/// assert!(equal::<IriSpec>(a, b, relaxed)?);
///
/// assert!(equal::<IriSpec>("HTTP://x/#a%20b", "http://x/#a b", EqualityOptions::new())?);
/// # Ok::<_, xri::error::Error>(())
/// ```
pub fn equal<S: Spec>(a: &S::Str, b: &S::Str, options: EqualityOptions) -> Result<bool, Error> {
    let a = Components::<S>::parse(a)?;
    let b = Components::<S>::parse(b)?;
    let eq = components_equal(&a, &b, options);
    trace!("{:?} == {:?} under {:?}: {}", a, b, options, eq);
    Ok(eq)
}

/// Compares parsed components.
fn components_equal<S: Spec>(a: &Components<S>, b: &Components<S>, options: EqualityOptions) -> bool {
    folded_scheme(a, options) == folded_scheme(b, options)
        && a.authority() == b.authority()
        && trimmed_path(a, options) == trimmed_path(b, options)
        && a.query() == b.query()
        && a.fragment() == b.fragment()
}

/// Returns the scheme, with `https` folded to `http` if requested.
fn folded_scheme<S: Spec>(c: &Components<S>, options: EqualityOptions) -> Option<&[u8]> {
    let scheme = c.scheme()?.as_bytes();
    if options.http_equals_https && scheme == b"https" {
        return Some(&b"http"[..]);
    }
    Some(scheme)
}

/// Returns the path, without one trailing slash if requested.
fn trimmed_path<S: Spec>(c: &Components<S>, options: EqualityOptions) -> &[u8] {
    let path = c.path().as_bytes();
    match path.split_last() {
        Some((b'/', rest)) if options.ignore_trailing_slash => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::spec::{IriSpec, UriSpec};

    /// Compares with the given relaxations.
    fn eq(a: &str, b: &str, http_equals_https: bool, ignore_trailing_slash: bool) -> bool {
        let options = EqualityOptions {
            http_equals_https,
            ignore_trailing_slash,
        };
        let text = equal::<IriSpec>(a, b, options).expect("valid references");
        let bytes = equal::<UriSpec>(a.as_bytes(), b.as_bytes(), options).expect("valid references");
        assert_eq!(text, bytes, "a={:?}, b={:?}", a, b);
        text
    }

    #[test]
    fn relaxations_are_independent() {
        let a = "https://example.com/a";
        let b = "http://example.com/a/";
        assert!(!eq(a, b, false, false));
        assert!(!eq(a, b, true, false));
        assert!(!eq(a, b, false, true));
        assert!(eq(a, b, true, true));
    }

    #[test]
    fn strict_comparison_matches_partial_eq() {
        let pairs = [
            ("http://a/b", "HTTP://a/b"),
            ("http://a/b", "http://A/b"),
            ("http://a/b#%7e", "http://a/b#~"),
            ("http://a/b?", "http://a/b"),
            ("//a", "///a"),
        ];
        for (a, b) in pairs {
            let ca = Components::<IriSpec>::parse(a).expect("valid reference");
            let cb = Components::<IriSpec>::parse(b).expect("valid reference");
            assert_eq!(eq(a, b, false, false), ca == cb, "a={:?}, b={:?}", a, b);
        }
    }

    #[test]
    fn only_https_is_folded() {
        assert!(eq("https://a/", "http://a/", true, false));
        assert!(eq("https://a/", "https://a/", true, false));
        assert!(!eq("wss://a/", "ws://a/", true, false));
        assert!(!eq("https://a/", "//a/", true, false));
    }

    #[test]
    fn only_one_trailing_slash_is_ignored() {
        assert!(eq("http://a", "http://a/", false, true));
        // Each side loses at most one slash.
        assert!(!eq("http://a/b//", "http://a/b/", false, true));
        assert!(!eq("http://a/b//", "http://a/b", false, true));
        assert!(eq("http://a/b//", "http://a/b//", false, true));
        assert!(!eq("http://a/b/?q", "http://a/b?p", false, true));
        assert!(eq("x/", "x", false, true));
    }

    #[test]
    fn parse_errors_are_reported() {
        let options = EqualityOptions::new();
        assert!(equal::<IriSpec>("1a:b", "a:b", options).is_err());
        assert!(equal::<IriSpec>("a:b", "a:b#%", options).is_err());
    }
}
