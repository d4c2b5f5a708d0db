//! Parsing, composition and resolution of [RFC 3986 URI][RFC 3986] and
//! [RFC 3987 IRI][RFC 3987] references.
//!
//! Every operation is generic over a [spec][`spec::Spec`]: [`spec::UriSpec`]
//! works on byte strings and [`spec::IriSpec`] on Unicode text. The two give
//! structurally identical results for ASCII input.
//!
//! This crate has no knowledge of specific schemes, does not touch the
//! network, and does not normalize hosts (no IDNA).
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//!
//! # Examples
//!
//! ```
//! use xri::components::IriComponents;
//! use xri::percent_encode::pct_encode;
//! use xri::resolve::resolve;
//! use xri::spec::IriSpec;
//!
//! let c = IriComponents::parse("HTTP://example.com/a/b?c#d")?;
//! assert_eq!(c.scheme(), Some("http"));
//! assert_eq!(c.path_segments()?, ["", "a", "b"]);
//!
//! assert_eq!(resolve::<IriSpec>("http://a/b/c/d;p?q", "../g", true)?, "http://a/b/g");
//! assert_eq!(pct_encode::<IriSpec>("Laguna Beach", "")?, "Laguna%20Beach");
//! # Ok::<_, xri::error::Error>(())
//! ```
//!
//! # Features
//!
//! This crate supports `no_std` usage, though the `alloc` crate is always
//! required.
//!
//! * `std` (**enabled by default**): implements `std::error::Error` for
//!   [`error::Error`].
//! * `memchr`: uses the `memchr` crate to search for delimiters.
//! * `serde`: implements `Serialize` and `Deserialize` for
//!   [`components::Components`].
//! * `log`: emits `trace` and `debug` records (target `xri`) while parsing
//!   and resolving. No logger is installed by this crate.
//!
//! # Rationale
//!
//! ## Absent and empty components are different
//!
//! `///abc` has an empty authority and `/abc` has none. Resolution depends
//! on that distinction: an empty authority still replaces the authority of
//! the base. For the same reason `http://h?` keeps an empty query and
//! composes back to `http://h?`, and `http://h` has no query at all.
//!
//! ## Only the scheme and the fragment are decoded on parse
//!
//! Decoding the authority, path or query would make `/` in `a%2Fb` or `&`
//! in `a%26b` indistinguishable from the delimiters. Those components are
//! kept as written, and [`components::parse_path`] and
//! [`components::parse_query`] decode each part after splitting. The
//! fragment has no inner structure, so it is decoded eagerly and encoded
//! again by [`components::compose`].
//!
//! ## `a:b` has a scheme, `a/b:c` does not
//!
//! A colon starts a scheme only if it comes before any `/`, `?` or `#`. A
//! colon inside the first path segment of a relative reference must be
//! written as `./a:b`.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod logging;

pub mod charclass;
pub mod compare;
pub mod components;
pub mod error;
pub(crate) mod parser;
pub mod percent_encode;
pub mod resolve;
pub mod spec;
