//! Percent encoding and decoding.
//!
//! Unreserved characters are never encoded, reserved characters are encoded
//! unless given as "safe", and everything else is always encoded as `%XX`
//! with uppercase hexadecimal digits.
//!
//! In the text domain ([`IriSpec`]), non-ASCII characters matching the
//! `ucschar` rule are unreserved and kept as is. Other non-ASCII characters
//! are encoded octet by octet of their UTF-8 representation.
//!
//! # Examples
//!
//! ```
//! use xri::percent_encode::{pct_decode, pct_encode};
//! use xri::spec::{IriSpec, UriSpec};
//!
//! assert_eq!(pct_encode::<IriSpec>("Laguna Beach", "")?, "Laguna%20Beach");
//! assert_eq!(pct_encode::<UriSpec>("\u{E4}".as_bytes(), "")?, b"%C3%A4");
//! assert_eq!(pct_encode::<IriSpec>("\u{E4}", "")?, "\u{E4}");
//! assert_eq!(
//!     pct_encode::<IriSpec>("https://example.com/a", ":/")?,
//!     "https://example.com/a"
//! );
//!
//! assert_eq!(pct_decode::<IriSpec>("%C3%91")?, "\u{D1}");
//! assert!(pct_decode::<IriSpec>("%4").is_err());
//! # Ok::<_, xri::error::Error>(())
//! ```
//!
//! [`IriSpec`]: `crate::spec::IriSpec`

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::charclass::FRAGMENT_SAFE;
use crate::error::Error;
use crate::parser::char::{hexdigit_value, is_ascii_unreserved, is_reserved};
use crate::parser::str::find;
use crate::spec::internal::Text;
use crate::spec::Spec;

/// Uppercase hexadecimal digits.
const HEXDIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Reserved characters kept literally in a composed fragment.
pub(crate) const FRAGMENT_SAFE_SET: SafeSet = SafeSet::from_ascii(FRAGMENT_SAFE);

/// A set of ASCII characters to be kept literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SafeSet {
    /// Bit `n` is set if the ASCII character `n` is safe.
    mask: u128,
}

impl SafeSet {
    /// Creates a safe set from ASCII characters without validation.
    ///
    /// The characters must all be reserved.
    #[must_use]
    pub(crate) const fn from_ascii(chars: &str) -> Self {
        let bytes = chars.as_bytes();
        let mut mask = 0_u128;
        let mut i = 0;
        while i < bytes.len() {
            mask |= 1_u128 << bytes[i];
            i += 1;
        }
        Self { mask }
    }

    /// Creates a safe set, checking that every character is reserved.
    pub(crate) fn new(chars: &str) -> Result<Self, Error> {
        if let Some((pos, c)) = chars
            .char_indices()
            .find(|&(_, c)| !u8::try_from(c).map_or(false, is_reserved))
        {
            return Err(Error::unsafe_character(c, pos));
        }
        Ok(Self::from_ascii(chars))
    }

    /// Checks if the ASCII byte is in the set.
    #[inline]
    #[must_use]
    fn contains(self, b: u8) -> bool {
        b < 0x80 && self.mask & (1_u128 << b) != 0
    }
}

/// Appends `%XX` for the given octet.
fn push_pct_encoded<S: Spec>(buf: &mut S::Owned, b: u8) {
    let triplet = [
        b'%',
        HEXDIGITS[usize::from(b >> 4)],
        HEXDIGITS[usize::from(b & 0xF)],
    ];
    <S::Str as Text>::push_ascii(buf, &triplet);
}

/// Percent-encodes the input and appends the result to the buffer.
pub(crate) fn encode_into<S: Spec>(input: &S::Str, safe: SafeSet, buf: &mut S::Owned) {
    let bytes = input.as_bytes();
    // Start of the pending run of literal characters.
    let mut run_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii() {
            if is_ascii_unreserved(b) || safe.contains(b) {
                i += 1;
                continue;
            }
            input.slice(run_start..i).push_to(buf);
            push_pct_encoded::<S>(buf, b);
            i += 1;
            run_start = i;
            continue;
        }

        let (len, literal) = match input.nonascii_char_at(i) {
            Some(c) => (c.len_utf8(), S::is_nonascii_char_unreserved(c)),
            None => (1, false),
        };
        if !literal {
            input.slice(run_start..i).push_to(buf);
            for &octet in &bytes[i..(i + len)] {
                push_pct_encoded::<S>(buf, octet);
            }
            run_start = i + len;
        }
        i += len;
    }
    input.slice(run_start..bytes.len()).push_to(buf);
}

/// Percent-encodes the input.
///
/// Characters in `safe` are kept literally. Every character of `safe` must be
/// a reserved character (`:/?#[]@!$&'()*+,;=`); otherwise an error of kind
/// [`UnsafeCharacter`][`crate::error::ErrorKind::UnsafeCharacter`] is
/// returned.
///
/// # Examples
///
/// ```
/// use xri::error::ErrorKind;
/// use xri::percent_encode::pct_encode;
/// use xri::spec::UriSpec;
///
/// assert_eq!(
///     pct_encode::<UriSpec>(b"20% of $100 = $20", "")?,
///     b"20%25%20of%20%24100%20%3D%20%2420"
/// );
///
/// let err = pct_encode::<UriSpec>(b"https://example.com/a", "a").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsafeCharacter);
/// # Ok::<_, xri::error::Error>(())
/// ```
pub fn pct_encode<S: Spec>(input: &S::Str, safe: &str) -> Result<S::Owned, Error> {
    let safe = SafeSet::new(safe)?;
    let mut buf = S::Owned::default();
    encode_into::<S>(input, safe, &mut buf);
    Ok(buf)
}

/// Percent-encodes the input if available.
///
/// `None` passes through as `None`. The safe set is validated in either case.
pub fn pct_encode_opt<S: Spec>(
    input: Option<&S::Str>,
    safe: &str,
) -> Result<Option<S::Owned>, Error> {
    let safe = SafeSet::new(safe)?;
    Ok(input.map(|input| {
        let mut buf = S::Owned::default();
        encode_into::<S>(input, safe, &mut buf);
        buf
    }))
}

/// Percent-decodes the input.
///
/// Every `%` must be followed by two hexadecimal digits (of either case).
/// In the text domain the decoded octets must form valid UTF-8 as a whole.
///
/// # Examples
///
/// ```
/// use xri::percent_encode::pct_decode;
/// use xri::spec::{IriSpec, UriSpec};
///
/// assert_eq!(pct_decode::<UriSpec>(b"%4E%4e")?, b"NN");
/// assert_eq!(pct_decode::<IriSpec>("Laguna%20Beach")?, "Laguna Beach");
///
/// let err = pct_decode::<IriSpec>("100%").unwrap_err();
/// assert!(err.is_truncated());
/// assert_eq!(err.position(), Some(3));
/// # Ok::<_, xri::error::Error>(())
/// ```
pub fn pct_decode<S: Spec>(input: &S::Str) -> Result<S::Owned, Error> {
    let bytes = input.as_bytes();
    let mut pos = match find(bytes, b'%') {
        Some(pos) => pos,
        None => return Ok(input.to_owned()),
    };

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut rest_start = 0;
    loop {
        decoded.extend_from_slice(&bytes[rest_start..pos]);
        let following = &bytes[(pos + 1)..];
        let octet = match following {
            [upper, lower, ..] => hexdigit_value(*upper)
                .zip(hexdigit_value(*lower))
                .map(|(upper, lower)| (upper << 4) | lower),
            _ => None,
        };
        match octet {
            Some(octet) => decoded.push(octet),
            None => return Err(Error::invalid_percent_encoding(pos, following)),
        }
        rest_start = pos + 3;
        match find(&bytes[rest_start..], b'%') {
            Some(next) => pos = rest_start + next,
            None => break,
        }
    }
    decoded.extend_from_slice(&bytes[rest_start..]);

    <S::Str as Text>::from_decoded(decoded)
}

/// Percent-decodes the input if available.
///
/// `None` passes through as `None`.
#[inline]
pub fn pct_decode_opt<S: Spec>(input: Option<&S::Str>) -> Result<Option<S::Owned>, Error> {
    input.map(pct_decode::<S>).transpose()
}

/// Percent-encodes control characters and spaces in the text.
///
/// Code points `U+0000..=U+0020` and `U+007F..=U+009F` are replaced by `%XX`
/// (the code point value, not its UTF-8 octets). Everything else, including
/// `%`, is kept as is. This is meant for displaying IRIs, not for producing
/// valid ones.
///
/// # Examples
///
/// ```
/// use xri::percent_encode::encode_nonprintable;
///
/// assert_eq!(encode_nonprintable("a b\tc\u{85}\u{A0}"), "a%20b%09c%85\u{A0}");
/// ```
#[must_use]
pub fn encode_nonprintable(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(c) {
            Ok(b) if b <= 0x20 || (0x7F..=0x9F).contains(&b) => {
                buf.push('%');
                buf.push(char::from(HEXDIGITS[usize::from(b >> 4)]));
                buf.push(char::from(HEXDIGITS[usize::from(b & 0xF)]));
            }
            _ => buf.push(c),
        }
    }
    buf
}
