//! Utilities.
#![allow(dead_code, unused_macros)]

/// Asserts that the `Display` form of the left side equals the right side.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let left = $left.to_string();
        let right: &str = $right;
        assert_eq!(left, right, "`Display` output does not match");
    }};
    ($left:expr, $right:expr, $($args:tt)+) => {{
        let left = $left.to_string();
        let right: &str = $right;
        assert_eq!(left, right, $($args)+);
    }};
}

/// Returns the text as bytes, for comparisons with byte domain results.
#[inline]
#[must_use]
pub fn bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Maps an optional text to optional bytes.
#[inline]
#[must_use]
pub fn opt_bytes(s: Option<&str>) -> Option<&[u8]> {
    s.map(str::as_bytes)
}
