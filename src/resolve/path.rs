//! Path merging and dot segment removal.
//!
//! See [RFC 3986 section 5.2.3] and [RFC 3986 section 5.2.4].
//!
//! [RFC 3986 section 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use alloc::borrow::ToOwned;

use crate::parser::str::{find, rfind};
use crate::spec::internal::Text;
use crate::spec::Spec;

/// Merges a relative-path reference with the base path.
///
/// If the base has an authority and an empty path, the result is the
/// reference path with a slash prepended. Otherwise the last segment of the
/// base path (everything after the last slash) is replaced by the reference
/// path.
///
/// # Examples
///
/// ```
/// use xri::resolve::merge_path;
/// use xri::spec::IriSpec;
///
/// assert_eq!(merge_path::<IriSpec>(Some("a"), "/b/c/d;p", "g"), "/b/c/g");
/// assert_eq!(merge_path::<IriSpec>(Some("a"), "", "g"), "/g");
/// assert_eq!(merge_path::<IriSpec>(None, "", "g"), "g");
/// assert_eq!(merge_path::<IriSpec>(None, "mid", "6"), "6");
/// ```
#[must_use]
pub fn merge_path<S: Spec>(
    base_authority: Option<&S::Str>,
    base_path: &S::Str,
    ref_path: &S::Str,
) -> S::Owned {
    let base_bytes = base_path.as_bytes();
    if base_authority.is_some() && base_bytes.is_empty() {
        let mut buf = S::Owned::default();
        <S::Str as Text>::push_ascii(&mut buf, b"/");
        ref_path.push_to(&mut buf);
        return buf;
    }
    match rfind(base_bytes, b'/') {
        Some(last_slash) => {
            let mut buf = base_path.slice(0..(last_slash + 1)).to_owned();
            ref_path.push_to(&mut buf);
            buf
        }
        None => ref_path.to_owned(),
    }
}

/// Removes `.` and `..` segments from the path.
///
/// `..` never climbs above the root: extra `..` segments are dropped.
///
/// # Examples
///
/// ```
/// use xri::resolve::remove_dot_segments;
/// use xri::spec::IriSpec;
///
/// assert_eq!(remove_dot_segments::<IriSpec>("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments::<IriSpec>("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments::<IriSpec>("/../../g"), "/g");
/// ```
#[must_use]
pub fn remove_dot_segments<S: Spec>(path: &S::Str) -> S::Owned {
    let input = path.as_bytes();
    let mut output = S::Owned::default();
    // The remaining input is `input[start..end]`. The rules replacing an
    // exact `/.` or `/..` with `/` shrink `end` to keep only the slash.
    let mut start = 0;
    let mut end = input.len();

    while start < end {
        let rest = &input[start..end];
        if rest.starts_with(b"../") {
            start += 3;
        } else if rest.starts_with(b"./") {
            start += 2;
        } else if rest.starts_with(b"/./") {
            start += 2;
        } else if rest == b"/." {
            end = start + 1;
        } else if rest.starts_with(b"/../") {
            start += 3;
            pop_last_segment::<S>(&mut output);
        } else if rest == b"/.." {
            end = start + 1;
            pop_last_segment::<S>(&mut output);
        } else if rest == b"." || rest == b".." {
            start = end;
        } else {
            let segment_len = match rest.first() {
                Some(b'/') => find(&rest[1..], b'/').map_or(rest.len(), |pos| pos + 1),
                _ => find(rest, b'/').unwrap_or(rest.len()),
            };
            path.slice(start..(start + segment_len)).push_to(&mut output);
            start += segment_len;
        }
    }

    output
}

/// Removes the last segment and its preceding slash (if any) from the buffer.
fn pop_last_segment<S: Spec>(buf: &mut S::Owned) {
    let len = rfind(buf.as_bytes(), b'/').unwrap_or(0);
    <S::Str as Text>::truncate(buf, len);
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::String;

    use crate::spec::{IriSpec, UriSpec};

    /// Removes dot segments from the text path.
    fn remove(path: &str) -> String {
        remove_dot_segments::<IriSpec>(path)
    }

    #[test]
    fn rfc3986_examples() {
        assert_eq!(remove("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove("mid/content=5/../6"), "mid/6");
    }

    #[test]
    fn exact_dots() {
        assert_eq!(remove(""), "");
        assert_eq!(remove("."), "");
        assert_eq!(remove(".."), "");
        assert_eq!(remove("/."), "/");
        assert_eq!(remove("/.."), "/");
        assert_eq!(remove("a/."), "a/");
        assert_eq!(remove("a/.."), "/");
        assert_eq!(remove("/a/b/.."), "/a/");
    }

    #[test]
    fn leading_relative_dots() {
        assert_eq!(remove("../a"), "a");
        assert_eq!(remove("./a"), "a");
        assert_eq!(remove("../../a/./b"), "a/b");
        assert_eq!(remove(".../a"), ".../a");
    }

    #[test]
    fn climbing_above_root() {
        assert_eq!(remove("/../../g"), "/g");
        assert_eq!(remove("/a/../../../b/"), "/b/");
        assert_eq!(remove("x/../.."), "/");
    }

    #[test]
    fn dot_like_segments_are_kept() {
        assert_eq!(remove("/g./.g/g../..g"), "/g./.g/g../..g");
        assert_eq!(remove("/%2E/%2E%2E"), "/%2E/%2E%2E");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(remove("//a//b/"), "//a//b/");
        assert_eq!(remove("/a//../b"), "/a/b");
    }

    #[test]
    fn idempotent() {
        for path in [
            "/a/b/c/./../../g",
            "a/..",
            "../x/./y/../..",
            "/./..//./a",
            ".//g",
            "g/./h/../",
        ] {
            let once = remove(path);
            assert_eq!(remove(&once), once, "path={:?}", path);
        }
    }

    #[test]
    fn non_ascii() {
        assert_eq!(remove("/\u{3042}/./\u{3044}/../\u{3046}"), "/\u{3042}/\u{3046}");
        assert_eq!(
            remove_dot_segments::<UriSpec>(b"/\xE3\x81\x82/../b"),
            b"/b".to_vec()
        );
    }

    #[test]
    fn merge() {
        assert_eq!(merge_path::<IriSpec>(Some(""), "", "g"), "/g");
        assert_eq!(merge_path::<IriSpec>(Some("a"), "/", "g"), "/g");
        assert_eq!(merge_path::<IriSpec>(None, "a/b", "../g"), "a/../g");
        assert_eq!(merge_path::<UriSpec>(None, b"/b/", b""), b"/b/".to_vec());
    }
}
