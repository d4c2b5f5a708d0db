//! A private module for sealed trait and internal implementations.
//!
//! Note that this MUST NOT be reachable from outside the crate.
//! See [Rust API Guidelines][sealed-trait] about the necessity of being private.
//!
//! [sealed-trait]:
//! https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed

use core::ops::Range;

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::spec::{IriSpec, UriSpec};

/// A trait to prohibit user-defined types from implementing `Spec`.
///
/// About sealed trait, see [Rust API Guidelines][future-proofing].
///
/// [future-proofing]: https://rust-lang.github.io/api-guidelines/future-proofing.html
pub trait Sealed: SpecInternal {}

impl Sealed for IriSpec {}
impl Sealed for UriSpec {}

/// Internal implementations for spec types.
pub trait SpecInternal: Sized {
    /// Checks if the given non-ASCII character is unreserved.
    #[must_use]
    fn is_nonascii_char_unreserved(c: char) -> bool;
    /// Checks if the given non-ASCII character is in a private use range.
    #[must_use]
    fn is_nonascii_char_private(c: char) -> bool;
}

/// Operations on the string type of a spec.
///
/// Byte offsets passed to these methods must lie on ASCII characters (or
/// the string ends). All delimiters of the generic syntax are ASCII, so
/// offsets found by searching for a delimiter byte always qualify.
pub trait Text: ToOwned {
    /// Returns the string as bytes.
    #[must_use]
    fn as_bytes(&self) -> &[u8];

    /// Returns the substring for the given byte range.
    #[must_use]
    fn slice(&self, range: Range<usize>) -> &Self;

    /// Returns the non-ASCII character starting at the given byte offset.
    ///
    /// Byte strings have no notion of characters and always return `None`.
    #[must_use]
    fn nonascii_char_at(&self, pos: usize) -> Option<char>;

    /// Appends the string to the buffer.
    fn push_to(&self, buf: &mut Self::Owned);

    /// Appends ASCII bytes to the buffer.
    ///
    /// Non-ASCII bytes in `bytes` are a caller bug.
    fn push_ascii(buf: &mut Self::Owned, bytes: &[u8]);

    /// Shortens the buffer to the given byte length.
    fn truncate(buf: &mut Self::Owned, len: usize);

    /// Returns an owned copy with ASCII letters folded to lowercase.
    #[must_use]
    fn to_ascii_lowercase_owned(&self) -> Self::Owned;

    /// Creates an owned string from decoded bytes.
    fn from_decoded(bytes: Vec<u8>) -> Result<Self::Owned, Error>;
}

impl Text for str {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    #[inline]
    fn nonascii_char_at(&self, pos: usize) -> Option<char> {
        self.get(pos..)
            .and_then(|rest| rest.chars().next())
            .filter(|c| !c.is_ascii())
    }

    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }

    fn push_ascii(buf: &mut String, bytes: &[u8]) {
        debug_assert!(bytes.is_ascii(), "[precondition] bytes must be ASCII");
        buf.extend(bytes.iter().map(|&b| char::from(b)));
    }

    #[inline]
    fn truncate(buf: &mut String, len: usize) {
        buf.truncate(len);
    }

    #[inline]
    fn to_ascii_lowercase_owned(&self) -> String {
        self.to_ascii_lowercase()
    }

    fn from_decoded(bytes: Vec<u8>) -> Result<String, Error> {
        String::from_utf8(bytes).map_err(|e| Error::invalid_utf8(e.utf8_error().valid_up_to()))
    }
}

impl Text for [u8] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    #[inline]
    fn nonascii_char_at(&self, _pos: usize) -> Option<char> {
        None
    }

    #[inline]
    fn push_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    #[inline]
    fn push_ascii(buf: &mut Vec<u8>, bytes: &[u8]) {
        debug_assert!(bytes.is_ascii(), "[precondition] bytes must be ASCII");
        buf.extend_from_slice(bytes);
    }

    #[inline]
    fn truncate(buf: &mut Vec<u8>, len: usize) {
        buf.truncate(len);
    }

    #[inline]
    fn to_ascii_lowercase_owned(&self) -> Vec<u8> {
        self.to_ascii_lowercase()
    }

    #[inline]
    fn from_decoded(bytes: Vec<u8>) -> Result<Vec<u8>, Error> {
        Ok(bytes)
    }
}
