//! URI and IRI resolvers.
//!
//! Resolution follows [RFC 3986 section 5.2.2]. The base is used as is: it
//! may be a relative reference, and its fragment is always ignored.
//!
//! # Strict and non-strict resolution
//!
//! Some legacy parsers treat a reference whose scheme equals the scheme of
//! the base as if it had no scheme, so that `http:g` against `http://a/b/c/d`
//! resolves to `http://a/b/c/g` rather than `http:g`. Strict resolution
//! (the default) does not.
//!
//! # Examples
//!
//! ```
//! use xri::resolve::resolve;
//! use xri::spec::IriSpec;
//!
//! let base = "http://a/b/c/d;p?q";
//! assert_eq!(resolve::<IriSpec>(base, "../g", true)?, "http://a/b/g");
//! assert_eq!(resolve::<IriSpec>(base, "#s", true)?, "http://a/b/c/d;p?q#s");
//! assert_eq!(resolve::<IriSpec>(base, "http:g", true)?, "http:g");
//! assert_eq!(resolve::<IriSpec>(base, "http:g", false)?, "http://a/b/c/g");
//! # Ok::<_, xri::error::Error>(())
//! ```
//!
//! [RFC 3986 section 5.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2

mod path;

use alloc::borrow::ToOwned;

use crate::components::Components;
use crate::error::Error;
use crate::spec::internal::Text;
use crate::spec::Spec;

pub use self::path::{merge_path, remove_dot_segments};

/// A resolver against the fixed base.
///
/// # Examples
///
/// ```
/// use xri::components::IriComponents;
/// use xri::resolve::FixedBaseResolver;
///
/// let base = IriComponents::parse("http://example.com/base/")?;
/// let resolver = FixedBaseResolver::new(&base);
///
/// assert_eq!(resolver.resolve("../there")?, "http://example.com/there");
/// assert_eq!(resolver.resolve("http:here")?, "http:here");
/// assert_eq!(resolver.strict(false).resolve("http:here")?, "http://example.com/base/here");
/// # Ok::<_, xri::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a, S: Spec> {
    /// Components of the base.
    base: &'a Components<S>,
    /// Whether a scheme equal to the base scheme is kept.
    strict: bool,
}

impl<'a, S: Spec> FixedBaseResolver<'a, S> {
    /// Creates a new strict resolver with the given base.
    #[inline]
    #[must_use]
    pub fn new(base: &'a Components<S>) -> Self {
        Self { base, strict: true }
    }

    /// Returns a resolver with the given strictness.
    #[inline]
    #[must_use]
    pub fn strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }

    /// Returns `true` if the resolver is strict.
    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &'a Components<S> {
        self.base
    }

    /// Parses the reference, resolves it against the fixed base, and composes
    /// the result.
    ///
    /// # Failures
    ///
    /// Fails if the reference cannot be parsed.
    pub fn resolve(&self, reference: &S::Str) -> Result<S::Owned, Error> {
        let reference = Components::<S>::parse(reference)?;
        Ok(self.resolve_components(&reference).compose())
    }

    /// Resolves the already parsed reference against the fixed base.
    #[must_use]
    pub fn resolve_components(&self, reference: &Components<S>) -> Components<S> {
        resolve_components(self.base, reference, self.strict)
    }
}

/// Parses the base and the reference, resolves the reference, and composes
/// the result.
///
/// # Failures
///
/// Fails if the base or the reference cannot be parsed.
pub fn resolve<S: Spec>(base: &S::Str, reference: &S::Str, strict: bool) -> Result<S::Owned, Error> {
    let base = Components::<S>::parse(base)?;
    let reference = Components::<S>::parse(reference)?;
    Ok(resolve_components(&base, &reference, strict).compose())
}

/// Resolves the reference against the base.
#[must_use]
fn resolve_components<S: Spec>(
    base: &Components<S>,
    reference: &Components<S>,
    strict: bool,
) -> Components<S> {
    let ref_scheme = match reference.scheme() {
        Some(scheme) if !strict && Some(scheme) == base.scheme() => {
            debug!(
                "ignoring the reference scheme {:?} equal to the base scheme (non-strict mode)",
                scheme
            );
            None
        }
        scheme => scheme,
    };

    let (scheme, authority, path, query) = if let Some(scheme) = ref_scheme {
        (
            Some(scheme),
            reference.authority(),
            remove_dot_segments::<S>(reference.path()),
            reference.query(),
        )
    } else if reference.authority().is_some() {
        (
            base.scheme(),
            reference.authority(),
            remove_dot_segments::<S>(reference.path()),
            reference.query(),
        )
    } else if reference.path().as_bytes().is_empty() {
        (
            base.scheme(),
            base.authority(),
            base.path().to_owned(),
            reference.query().or_else(|| base.query()),
        )
    } else if reference.has_absolute_path() {
        (
            base.scheme(),
            base.authority(),
            remove_dot_segments::<S>(reference.path()),
            reference.query(),
        )
    } else {
        let merged = merge_path::<S>(base.authority(), base.path(), reference.path());
        trace!("merged path: {:?}", merged);
        (
            base.scheme(),
            base.authority(),
            remove_dot_segments::<S>(&merged),
            reference.query(),
        )
    };

    Components::from_parts_unchecked(
        scheme.map(ToOwned::to_owned),
        authority.map(ToOwned::to_owned),
        path,
        query.map(ToOwned::to_owned),
        reference.fragment().map(ToOwned::to_owned),
    )
}
