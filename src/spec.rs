//! URI and IRI specifications.
//!
//! Every operation in this crate is written once and instantiated for one of
//! the two specs below. [`UriSpec`] works on byte strings (`[u8]` and
//! `Vec<u8>`) and follows [RFC 3986]; [`IriSpec`] works on Unicode text (`str`
//! and `String`) and follows [RFC 3987], which additionally allows a wide range
//! of non-ASCII characters to appear unencoded.
//!
//! The two specs produce structurally identical results for ASCII-only input.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

pub(crate) mod internal;

use core::fmt;
use core::hash::Hash;
use core::ops::Deref;

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::parser::char::{is_iprivate, is_ucschar};

/// A trait for spec types.
///
/// This trait is not intended to be implemented by crate users.
pub trait Spec: internal::Sealed + Clone + Copy + fmt::Debug + PartialEq + Eq + Hash + 'static {
    /// Borrowed string type of the spec.
    type Str: ?Sized
        + internal::Text
        + ToOwned<Owned = Self::Owned>
        + fmt::Debug
        + PartialEq
        + Eq
        + Hash;
    /// Owned string type of the spec.
    type Owned: Clone
        + Default
        + fmt::Debug
        + PartialEq
        + Eq
        + Hash
        + AsRef<[u8]>
        + Deref<Target = Self::Str>;
}

/// A type that represents specification of IRI.
///
/// Text (`str`) is used as the string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IriSpec {}

impl Spec for IriSpec {
    type Str = str;
    type Owned = String;
}

impl internal::SpecInternal for IriSpec {
    #[inline]
    fn is_nonascii_char_unreserved(c: char) -> bool {
        is_ucschar(c)
    }

    #[inline]
    fn is_nonascii_char_private(c: char) -> bool {
        is_iprivate(c)
    }
}

/// A type that represents specification of URI.
///
/// Bytes (`[u8]`) are used as the string type. Non-ASCII bytes are never
/// unreserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriSpec {}

impl Spec for UriSpec {
    type Str = [u8];
    type Owned = Vec<u8>;
}

impl internal::SpecInternal for UriSpec {
    #[inline]
    fn is_nonascii_char_unreserved(_: char) -> bool {
        false
    }

    #[inline]
    fn is_nonascii_char_private(_: char) -> bool {
        false
    }
}
