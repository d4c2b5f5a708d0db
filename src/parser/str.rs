//! Functions for common string operations.
//!
//! With `memchr` feature, the searches are delegated to the `memchr` crate.

/// Returns the position of the first occurrence of the needle.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the position of the last occurrence of the needle.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the position of the first occurrence of any of the three needles.
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Returns the position of the first occurrence of any of the four needles.
#[must_use]
pub(crate) fn find4(
    haystack: &[u8],
    needle1: u8,
    needle2: u8,
    needle3: u8,
    needle4: u8,
) -> Option<usize> {
    let first3 = find3(haystack, needle1, needle2, needle3);
    let limit = first3.unwrap_or(haystack.len());
    match find(&haystack[..limit], needle4) {
        Some(pos) => Some(pos),
        None => first3,
    }
}

/// Splits the bytes at the positions of the needle, like `str::split`.
///
/// Returns the ranges of the parts. An empty haystack yields one empty part.
pub(crate) fn split_ranges(
    haystack: &[u8],
    needle: u8,
) -> impl Iterator<Item = core::ops::Range<usize>> + '_ {
    let mut start = Some(0);
    core::iter::from_fn(move || {
        let part_start = start?;
        match find(&haystack[part_start..], needle) {
            Some(pos) => {
                let part_end = part_start + pos;
                start = Some(part_end + 1);
                Some(part_start..part_end)
            }
            None => {
                start = None;
                Some(part_start..haystack.len())
            }
        }
    })
}
