//! Character classes of the generic syntax.
//!
//! Code points are taken as `u32` so that the same predicates serve both the
//! byte domain (where every byte is a code point below 0x100) and the text
//! domain.
//!
//! ```
//! use xri::charclass::{is_reserved, is_unreserved};
//! use xri::spec::{IriSpec, UriSpec};
//!
//! assert!(is_reserved(u32::from(b'/')));
//! assert!(is_unreserved::<UriSpec>(u32::from(b'~')));
//! assert!(!is_unreserved::<UriSpec>(0xE4));
//! assert!(is_unreserved::<IriSpec>(0xE4));
//! ```

use crate::parser::char;
use crate::spec::Spec;

/// General delimiters (`gen-delims`).
pub const GENERAL_DELIMITERS: &str = ":/?#[]@";

/// Sub-delimiters (`sub-delims`).
pub const SUB_DELIMITERS: &str = "!$&'()*+,;=";

/// Reserved characters (`reserved`).
pub const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Reserved characters allowed literally in userinfo.
pub const USERINFO_SAFE: &str = "!$&'()*+,;=:";

/// Reserved characters allowed literally in a path.
pub const PATH_SAFE: &str = "!$&'()*+,;=:@/";

/// Reserved characters allowed literally in a fragment (and a query).
pub const FRAGMENT_SAFE: &str = "!$&'()*+,;=:@/?";

/// Returns the code point as an ASCII byte, if it is one.
#[inline]
#[must_use]
fn ascii(cp: u32) -> Option<u8> {
    u8::try_from(cp).ok().filter(u8::is_ascii)
}

/// Checks if the code point is a general delimiter.
#[inline]
#[must_use]
pub fn is_gen_delim(cp: u32) -> bool {
    ascii(cp).map_or(false, char::is_gen_delim)
}

/// Checks if the code point is a sub-delimiter.
#[inline]
#[must_use]
pub fn is_sub_delim(cp: u32) -> bool {
    ascii(cp).map_or(false, char::is_sub_delim)
}

/// Checks if the code point is reserved.
#[inline]
#[must_use]
pub fn is_reserved(cp: u32) -> bool {
    ascii(cp).map_or(false, char::is_reserved)
}

/// Checks if the code point is unreserved in the given spec.
///
/// For [`UriSpec`][`crate::spec::UriSpec`] only ASCII letters, digits, `-`,
/// `.`, `_` and `~` are unreserved. [`IriSpec`][`crate::spec::IriSpec`]
/// additionally accepts `ucschar` code points.
#[must_use]
pub fn is_unreserved<S: Spec>(cp: u32) -> bool {
    match ascii(cp) {
        Some(b) => char::is_ascii_unreserved(b),
        None => core::char::from_u32(cp).map_or(false, S::is_nonascii_char_unreserved),
    }
}

/// Checks if the code point is in a private use range of the given spec.
///
/// Always `false` for [`UriSpec`][`crate::spec::UriSpec`].
#[must_use]
pub fn is_private<S: Spec>(cp: u32) -> bool {
    core::char::from_u32(cp).map_or(false, S::is_nonascii_char_private)
}

/// Checks if the code point matches the `ucschar` rule of RFC 3987.
#[inline]
#[must_use]
pub fn is_ucschar(cp: u32) -> bool {
    core::char::from_u32(cp).map_or(false, char::is_ucschar)
}

/// Checks if the code point matches the `iprivate` rule of RFC 3987.
#[inline]
#[must_use]
pub fn is_iprivate(cp: u32) -> bool {
    core::char::from_u32(cp).map_or(false, char::is_iprivate)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::spec::{IriSpec, UriSpec};

    #[test]
    fn constants_agree_with_predicates() {
        assert!(GENERAL_DELIMITERS.bytes().all(|b| is_gen_delim(b.into())));
        assert!(SUB_DELIMITERS.bytes().all(|b| is_sub_delim(b.into())));
        assert_eq!(
            RESERVED.len(),
            GENERAL_DELIMITERS.len() + SUB_DELIMITERS.len()
        );
        for set in [RESERVED, USERINFO_SAFE, PATH_SAFE, FRAGMENT_SAFE] {
            assert!(set.bytes().all(|b| is_reserved(b.into())), "{:?}", set);
        }
    }

    #[test]
    fn unreserved_differs_by_spec() {
        for cp in [0xA0, 0xD7FF, 0x1_0000, 0xE_1000] {
            assert!(is_unreserved::<IriSpec>(cp), "{:#X}", cp);
            assert!(!is_unreserved::<UriSpec>(cp), "{:#X}", cp);
        }
        for cp in [0x7F, 0x9F, 0xFFFE, 0x1_FFFF, 0xE000, 0x11_0000] {
            assert!(!is_unreserved::<IriSpec>(cp), "{:#X}", cp);
        }
        assert!(is_unreserved::<UriSpec>(u32::from(b'a')));
        assert!(!is_unreserved::<IriSpec>(u32::from(b'%')));
    }

    #[test]
    fn private_ranges() {
        assert!(is_private::<IriSpec>(0xE000));
        assert!(!is_private::<UriSpec>(0xE000));
        assert!(is_iprivate(0x10_FFFD));
        assert!(!is_iprivate(0xD800));
        assert!(!is_ucschar(0xD800));
    }

    #[test]
    fn non_ascii_is_never_reserved() {
        assert!(!is_reserved(0x100 + u32::from(b'/')));
        assert!(!is_reserved(0xBF));
    }
}
