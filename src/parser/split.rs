//! Splitting references into components.
//!
//! These functions never fail: every string splits into the five components
//! of a reference. Validation of the scheme and percent decoding happen
//! afterwards, in [`crate::components`].
//!
//! A colon starts a scheme only if no `/`, `?` or `#` comes before it, as in
//! the RFC 3986 grammar. This deliberately differs from splitting on the
//! first colon of the whole string: `g?y:z` is a relative reference with the
//! query `y:z`, not a reference with the invalid scheme `g?y`.

pub(crate) mod authority;

use crate::parser::str::{find, find4};
use crate::spec::internal::Text;

/// Raw components of a reference, borrowed from the source string.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawComponents<'a, T: ?Sized> {
    /// Scheme candidate, not yet validated nor decoded.
    pub(crate) scheme: Option<&'a T>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a T>,
    /// Path.
    pub(crate) path: &'a T,
    /// Query.
    pub(crate) query: Option<&'a T>,
    /// Fragment, not yet decoded.
    pub(crate) fragment: Option<&'a T>,
}

impl<T: ?Sized> Clone for RawComponents<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RawComponents<'_, T> {}

/// Eats a scheme candidate and a following colon if available, and returns
/// the rest and the scheme.
///
/// The scheme candidate is the string before the first colon, if that colon
/// comes before any slash, question mark, or hash character. In particular a
/// string starting with a slash never has a scheme.
#[must_use]
fn scheme_colon_opt<T: ?Sized + Text>(i: &T) -> (&T, Option<&T>) {
    let bytes = i.as_bytes();
    match find4(bytes, b':', b'/', b'?', b'#') {
        Some(pos) if bytes[pos] == b':' => (i.slice(pos + 1..bytes.len()), Some(i.slice(0..pos))),
        _ => (i, None),
    }
}

/// Splits the string at the first occurrence of the delimiter.
///
/// Returns `(before, Some(after))` if the delimiter is found, and
/// `(whole, None)` otherwise.
#[must_use]
fn partition<T: ?Sized + Text>(i: &T, delim: u8) -> (&T, Option<&T>) {
    let bytes = i.as_bytes();
    match find(bytes, delim) {
        Some(pos) => (i.slice(0..pos), Some(i.slice(pos + 1..bytes.len()))),
        None => (i, None),
    }
}

/// Splits the hierarchical part into authority and path.
#[must_use]
fn authority_and_path<T: ?Sized + Text>(i: &T) -> (Option<&T>, &T) {
    let bytes = i.as_bytes();
    if !bytes.starts_with(b"//") {
        return (None, i);
    }
    let len = bytes.len();
    match find(&bytes[2..], b'/') {
        Some(pos) => {
            let slash = pos + 2;
            (Some(i.slice(2..slash)), i.slice(slash..len))
        }
        None => (Some(i.slice(2..len)), i.slice(len..len)),
    }
}

/// Decomposes the given reference.
#[must_use]
pub(crate) fn decompose<T: ?Sized + Text>(i: &T) -> RawComponents<'_, T> {
    let (scheme_specific, scheme) = scheme_colon_opt(i);
    let (before_fragment, fragment) = partition(scheme_specific, b'#');
    let (hier_part, query) = partition(before_fragment, b'?');
    let (authority, path) = authority_and_path(hier_part);
    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}
