//! Builder of components.

use alloc::borrow::ToOwned;

use crate::components::Components;
use crate::error::{Component, Error};
use crate::parser::validate;
use crate::spec::internal::Text;
use crate::spec::Spec;

/// Builder of [`Components`].
///
/// Setters may be called any number of times; the last value wins. All the
/// validation happens in [`build`][`Self::build`].
///
/// # Examples
///
/// ```
/// use xri::components::Builder;
/// use xri::spec::IriSpec;
///
/// let mut builder = Builder::<IriSpec>::new();
/// builder.scheme(Some("HTTPS"));
/// builder.authority(Some("example.com"));
/// builder.path("/search");
/// builder.query(Some("q=rust"));
///
/// let built = builder.build()?;
/// assert_eq!(built.scheme(), Some("https"));
/// assert_eq!(built.to_string(), "https://example.com/search?q=rust");
/// # Ok::<_, xri::error::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Builder<'a, S: Spec> {
    /// Scheme.
    scheme: Option<&'a S::Str>,
    /// Authority.
    authority: Option<&'a S::Str>,
    /// Path.
    path: Option<&'a S::Str>,
    /// Query.
    query: Option<&'a S::Str>,
    /// Fragment, not encoded.
    fragment: Option<&'a S::Str>,
}

impl<S: Spec> Clone for Builder<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Spec> Copy for Builder<'_, S> {}

impl<S: Spec> Default for Builder<'_, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Spec> Builder<'a, S> {
    /// Creates a builder with every component absent and an empty path.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: None,
            authority: None,
            path: None,
            query: None,
            fragment: None,
        }
    }

    /// Sets or unsets the scheme.
    ///
    /// The scheme is validated and lowercased on build. It may be given in
    /// any case but must not be empty when present.
    #[inline]
    pub fn scheme(&mut self, v: Option<&'a S::Str>) {
        self.scheme = v;
    }

    /// Sets or unsets the authority.
    ///
    /// The authority is used as is. `Some("")` is an empty authority, which
    /// is different from an absent one.
    #[inline]
    pub fn authority(&mut self, v: Option<&'a S::Str>) {
        self.authority = v;
    }

    /// Sets the path.
    #[inline]
    pub fn path(&mut self, v: &'a S::Str) {
        self.path = Some(v);
    }

    /// Sets or unsets the query.
    #[inline]
    pub fn query(&mut self, v: Option<&'a S::Str>) {
        self.query = v;
    }

    /// Sets or unsets the fragment.
    ///
    /// The fragment is given decoded, and encoded on composition.
    #[inline]
    pub fn fragment(&mut self, v: Option<&'a S::Str>) {
        self.fragment = v;
    }

    /// Builds the components.
    ///
    /// # Failures
    ///
    /// * An empty or invalid scheme is an error.
    /// * An empty query or fragment is an error of kind
    ///   [`EmptyComponent`][`crate::error::ErrorKind::EmptyComponent`]; use
    ///   `None` for an absent one.
    pub fn build(self) -> Result<Components<S>, Error> {
        let scheme = self.scheme.map(validate::scheme).transpose()?;
        let query = non_empty(self.query, Component::Query)?;
        let fragment = non_empty(self.fragment, Component::Fragment)?;
        let path = match self.path {
            Some(path) => path.to_owned(),
            None => S::Owned::default(),
        };
        Ok(Components::from_parts_unchecked(
            scheme,
            self.authority.map(ToOwned::to_owned),
            path,
            query.map(ToOwned::to_owned),
            fragment.map(ToOwned::to_owned),
        ))
    }
}

/// Rejects `Some("")`.
fn non_empty<T: ?Sized + Text>(v: Option<&T>, component: Component) -> Result<Option<&T>, Error> {
    match v {
        Some(s) if s.as_bytes().is_empty() => Err(Error::empty_component(component)),
        v => Ok(v),
    }
}
