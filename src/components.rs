//! Components of URI and IRI references.
//!
//! A reference splits into five components: scheme, authority, path, query
//! and fragment. [`Components`] holds them as owned strings, and the free
//! functions here derive finer-grained parts on demand.
//!
//! # Examples
//!
//! ```
//! use xri::components::IriComponents;
//!
//! let c = IriComponents::parse("HTTP://user@example.com:8042/over/there?name=ferret#nose")?;
//! assert_eq!(c.scheme(), Some("http"));
//! assert_eq!(c.authority(), Some("user@example.com:8042"));
//! assert_eq!(c.path(), "/over/there");
//! assert_eq!(c.query(), Some("name=ferret"));
//! assert_eq!(c.fragment(), Some("nose"));
//!
//! let authority = c.authority_components().expect("authority is present");
//! assert_eq!(authority.userinfo(), Some("user"));
//! assert_eq!(authority.host(), "example.com");
//! assert_eq!(authority.port_number(), Some(8042));
//!
//! assert_eq!(c.origin().as_deref(), Some("http://example.com:8042"));
//! assert_eq!(c.compose(), "http://user@example.com:8042/over/there?name=ferret#nose");
//! # Ok::<_, xri::error::Error>(())
//! ```

mod builder;
#[cfg(feature = "serde")]
mod serialize;

use core::fmt;

use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use crate::error::Error;
use crate::parser::split::authority::decompose_authority;
use crate::parser::split::decompose;
use crate::parser::str::{find, split_ranges};
use crate::parser::validate;
use crate::percent_encode::{encode_into, pct_decode, pct_decode_opt, FRAGMENT_SAFE_SET};
use crate::spec::internal::Text;
use crate::spec::{IriSpec, Spec, UriSpec};

pub use self::builder::Builder;

/// Components of a URI reference.
pub type UriComponents = Components<UriSpec>;

/// Components of an IRI reference.
pub type IriComponents = Components<IriSpec>;

/// A query parameter: a percent-decoded key and an optional value.
pub type QueryParameter<S> = (<S as Spec>::Owned, Option<<S as Spec>::Owned>);

/// Components of a URI or IRI reference.
///
/// The scheme is always lowercase and the fragment is percent-decoded. The
/// authority, path and query are kept as written.
///
/// An absent component (`None`) is distinct from an empty one (`Some("")`):
/// `///abc` has an empty authority, while `/abc` has none. The same holds for
/// the query and the fragment, so that `http://h?` composes back to itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Components<S: Spec> {
    /// Scheme, lowercase.
    scheme: Option<S::Owned>,
    /// Authority.
    authority: Option<S::Owned>,
    /// Path.
    path: S::Owned,
    /// Query.
    query: Option<S::Owned>,
    /// Fragment, decoded.
    fragment: Option<S::Owned>,
}

impl<S: Spec> Components<S> {
    /// Parses the given reference.
    ///
    /// # Failures
    ///
    /// Fails if the scheme or the fragment is not correctly percent-encoded,
    /// or if the decoded scheme is invalid. A colon at the very beginning
    /// (such as `:x`) is an empty scheme and is rejected.
    pub fn parse(reference: &S::Str) -> Result<Self, Error> {
        let raw = decompose(reference);
        let scheme = match raw.scheme {
            Some(candidate) => {
                let decoded = pct_decode::<S>(candidate)?;
                Some(validate::scheme(&*decoded)?)
            }
            None => None,
        };
        let fragment = pct_decode_opt::<S>(raw.fragment)?;
        trace!(
            "decomposed reference {:?}: scheme={:?}, authority={:?}, path={:?}, query={:?}",
            reference,
            scheme,
            raw.authority,
            raw.path,
            raw.query
        );

        Ok(Self {
            scheme,
            authority: raw.authority.map(ToOwned::to_owned),
            path: raw.path.to_owned(),
            query: raw.query.map(ToOwned::to_owned),
            fragment,
        })
    }

    /// Creates components from already validated parts.
    #[must_use]
    pub(crate) fn from_parts_unchecked(
        scheme: Option<S::Owned>,
        authority: Option<S::Owned>,
        path: S::Owned,
        query: Option<S::Owned>,
        fragment: Option<S::Owned>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&S::Str> {
        self.scheme.as_deref()
    }

    /// Returns the authority.
    ///
    /// Note that this can be `Some("")`.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&S::Str> {
        self.authority.as_deref()
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &S::Str {
        &self.path
    }

    /// Returns the query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&S::Str> {
        self.query.as_deref()
    }

    /// Returns the percent-decoded fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&S::Str> {
        self.fragment.as_deref()
    }

    /// Returns the userinfo, host and port, if the authority is present.
    #[inline]
    #[must_use]
    pub fn authority_components(&self) -> Option<AuthorityComponents<'_, S>> {
        parse_authority::<S>(self.authority())
    }

    /// Returns the percent-decoded path segments.
    ///
    /// An absolute path yields a leading empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use xri::components::IriComponents;
    ///
    /// let c = IriComponents::parse("http://example.com/a%20b/c/")?;
    /// assert_eq!(c.path_segments()?, ["", "a b", "c", ""]);
    /// # Ok::<_, xri::error::Error>(())
    /// ```
    pub fn path_segments(&self) -> Result<Vec<S::Owned>, Error> {
        parse_path::<S>(self.path())
    }

    /// Returns the percent-decoded query parameters, if the query is present.
    pub fn query_parameters(&self) -> Result<Option<Vec<QueryParameter<S>>>, Error> {
        parse_query::<S>(self.query())
    }

    /// Returns the origin, `scheme://host[:port]`.
    ///
    /// Returns `None` unless both the scheme and the authority are present.
    /// An empty port is omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use xri::components::IriComponents;
    ///
    /// let c = IriComponents::parse("https://user@example.com:/path")?;
    /// assert_eq!(c.origin().as_deref(), Some("https://example.com"));
    ///
    /// let c = IriComponents::parse("mailto:user@example.com")?;
    /// assert_eq!(c.origin(), None);
    /// # Ok::<_, xri::error::Error>(())
    /// ```
    #[must_use]
    pub fn origin(&self) -> Option<S::Owned> {
        let scheme = self.scheme()?;
        let authority = self.authority_components()?;
        let mut buf = S::Owned::default();
        scheme.push_to(&mut buf);
        <S::Str as Text>::push_ascii(&mut buf, b"://");
        authority.host().push_to(&mut buf);
        if let Some(port) = authority.port().filter(|port| !port.as_bytes().is_empty()) {
            <S::Str as Text>::push_ascii(&mut buf, b":");
            port.push_to(&mut buf);
        }
        Some(buf)
    }

    /// Returns `true` if the path starts with a slash.
    #[inline]
    #[must_use]
    pub fn has_absolute_path(&self) -> bool {
        self.path().as_bytes().first() == Some(&b'/')
    }

    /// Composes the components into a reference string.
    ///
    /// See [`compose`].
    #[must_use]
    pub fn compose(&self) -> S::Owned {
        compose::<S>(
            self.scheme(),
            self.authority(),
            self.path(),
            self.query(),
            self.fragment(),
        )
    }

    /// Returns the owned components as
    /// `(scheme, authority, path, query, fragment)`.
    #[allow(clippy::type_complexity)]
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Option<S::Owned>,
        Option<S::Owned>,
        S::Owned,
        Option<S::Owned>,
        Option<S::Owned>,
    ) {
        (
            self.scheme,
            self.authority,
            self.path,
            self.query,
            self.fragment,
        )
    }
}

impl<S: Spec> fmt::Debug for Components<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Components");
        if let Some(scheme) = self.scheme() {
            debug.field("scheme", &scheme);
        }
        if let Some(authority) = self.authority() {
            debug.field("authority", &authority);
        }
        debug.field("path", &self.path());
        if let Some(query) = self.query() {
            debug.field("query", &query);
        }
        if let Some(fragment) = self.fragment() {
            debug.field("fragment", &fragment);
        }
        debug.finish()
    }
}

impl fmt::Display for Components<IriSpec> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose())
    }
}

impl core::str::FromStr for Components<IriSpec> {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Userinfo, host and port of an authority.
///
/// The parts are borrowed from the authority as written, without decoding.
///
/// A host starting with `[` is an IP literal and runs through the closing
/// `]`, so `[2001:db8::7]:80` has host `[2001:db8::7]` and port `80`. Any
/// other host ends at the first `:`.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthorityComponents<'a, S: Spec> {
    /// Userinfo.
    userinfo: Option<&'a S::Str>,
    /// Host.
    host: &'a S::Str,
    /// Port.
    port: Option<&'a S::Str>,
}

impl<S: Spec> Clone for AuthorityComponents<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Spec> Copy for AuthorityComponents<'_, S> {}

impl<'a, S: Spec> AuthorityComponents<'a, S> {
    /// Returns the userinfo, the part before the first `@`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a S::Str> {
        self.userinfo
    }

    /// Returns the host.
    ///
    /// An IP literal keeps its brackets.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a S::Str {
        self.host
    }

    /// Returns the port, the part after the colon following the host.
    ///
    /// Note that this can be `Some("")`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&'a S::Str> {
        self.port
    }

    /// Returns the port as a number.
    ///
    /// Returns `None` if the port is absent, empty, contains anything but
    /// ASCII digits, or does not fit in 16 bits.
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        let digits = self.port?.as_bytes();
        if digits.is_empty() {
            return None;
        }
        digits.iter().try_fold(0_u16, |acc, &b| {
            if !b.is_ascii_digit() {
                return None;
            }
            acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
        })
    }
}

/// Splits the authority into userinfo, host and port.
///
/// `None` passes through as `None`.
///
/// # Examples
///
/// ```
/// use xri::components::parse_authority;
/// use xri::spec::IriSpec;
///
/// let parts = parse_authority::<IriSpec>(Some("user:p@ssword@host:http"))
///     .expect("authority is present");
/// assert_eq!(parts.userinfo(), Some("user:p"));
/// assert_eq!(parts.host(), "ssword@host");
/// assert_eq!(parts.port(), Some("http"));
/// assert_eq!(parts.port_number(), None);
/// ```
#[must_use]
pub fn parse_authority<S: Spec>(authority: Option<&S::Str>) -> Option<AuthorityComponents<'_, S>> {
    let authority = authority?;
    let ranges = decompose_authority(authority.as_bytes());
    Some(AuthorityComponents {
        userinfo: ranges.userinfo.map(|range| authority.slice(range)),
        host: authority.slice(ranges.host),
        port: ranges.port.map(|range| authority.slice(range)),
    })
}

/// Splits the path on `/` and percent-decodes each segment.
///
/// An empty path yields one empty segment.
pub fn parse_path<S: Spec>(path: &S::Str) -> Result<Vec<S::Owned>, Error> {
    split_ranges(path.as_bytes(), b'/')
        .map(|range| pct_decode::<S>(path.slice(range)))
        .collect()
}

/// Splits the query into parameters and percent-decodes them.
///
/// Parameters are separated by `&`, and the key and the value by the first
/// `=`. A parameter without `=` has no value. `None` passes through as `None`.
///
/// # Examples
///
/// ```
/// use xri::components::parse_query;
/// use xri::spec::IriSpec;
///
/// let params = parse_query::<IriSpec>(Some("a=1&b&c=x%3Dy=z"))?.expect("query is present");
/// assert_eq!(
///     params,
///     [
///         ("a".to_owned(), Some("1".to_owned())),
///         ("b".to_owned(), None),
///         ("c".to_owned(), Some("x=y=z".to_owned())),
///     ]
/// );
///
/// assert_eq!(parse_query::<IriSpec>(None)?, None);
/// # Ok::<_, xri::error::Error>(())
/// ```
pub fn parse_query<S: Spec>(
    query: Option<&S::Str>,
) -> Result<Option<Vec<QueryParameter<S>>>, Error> {
    let query = match query {
        Some(query) => query,
        None => return Ok(None),
    };
    split_ranges(query.as_bytes(), b'&')
        .map(|range| -> Result<QueryParameter<S>, Error> {
            let item = query.slice(range);
            let bytes = item.as_bytes();
            match find(bytes, b'=') {
                Some(eq) => Ok((
                    pct_decode::<S>(item.slice(0..eq))?,
                    Some(pct_decode::<S>(item.slice((eq + 1)..bytes.len()))?),
                )),
                None => Ok((pct_decode::<S>(item)?, None)),
            }
        })
        .collect::<Result<Vec<_>, Error>>()
        .map(Some)
}

/// Composes the components into a reference string.
///
/// The scheme, authority, path and query are emitted as given. The fragment
/// is percent-encoded, keeping unreserved characters and
/// [`FRAGMENT_SAFE`][`crate::charclass::FRAGMENT_SAFE`] literally.
///
/// # Examples
///
/// ```
/// use xri::components::compose;
/// use xri::spec::IriSpec;
///
/// let composed = compose::<IriSpec>(
///     Some("http"),
///     Some("example.com"),
///     "/a",
///     Some(""),
///     Some("section 1/2"),
/// );
/// assert_eq!(composed, "http://example.com/a?#section%201/2");
/// ```
#[must_use]
pub fn compose<S: Spec>(
    scheme: Option<&S::Str>,
    authority: Option<&S::Str>,
    path: &S::Str,
    query: Option<&S::Str>,
    fragment: Option<&S::Str>,
) -> S::Owned {
    let mut buf = S::Owned::default();
    if let Some(scheme) = scheme {
        scheme.push_to(&mut buf);
        <S::Str as Text>::push_ascii(&mut buf, b":");
    }
    if let Some(authority) = authority {
        <S::Str as Text>::push_ascii(&mut buf, b"//");
        authority.push_to(&mut buf);
    }
    path.push_to(&mut buf);
    if let Some(query) = query {
        <S::Str as Text>::push_ascii(&mut buf, b"?");
        query.push_to(&mut buf);
    }
    if let Some(fragment) = fragment {
        <S::Str as Text>::push_ascii(&mut buf, b"#");
        encode_into::<S>(fragment, FRAGMENT_SAFE_SET, &mut buf);
    }
    buf
}
