//! Serde support.
//!
//! Components are serialized as the composed reference: a string for IRIs and
//! bytes for URIs. Deserialization parses it back.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::components::Components;
use crate::spec::{IriSpec, UriSpec};

impl Serialize for Components<IriSpec> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.compose())
    }
}

impl Serialize for Components<UriSpec> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.compose())
    }
}

/// Visitor parsing a composed reference.
#[derive(Debug, Clone, Copy)]
struct ComponentsVisitor<S>(PhantomData<fn() -> S>);

impl<'de> Visitor<'de> for ComponentsVisitor<IriSpec> {
    type Value = Components<IriSpec>;

    #[inline]
    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an IRI reference string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Components::<IriSpec>::parse(v).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for ComponentsVisitor<UriSpec> {
    type Value = Components<UriSpec>;

    #[inline]
    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a URI reference as bytes or string")
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Components::<UriSpec>::parse(v).map_err(E::custom)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_bytes(v.as_bytes())
    }
}

impl<'de> Deserialize<'de> for Components<IriSpec> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ComponentsVisitor::<IriSpec>(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Components<UriSpec> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(ComponentsVisitor::<UriSpec>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

    use crate::components::{IriComponents, UriComponents};

    #[test]
    fn iri_as_string() {
        let c = IriComponents::parse("http://a/b?c#d%20e").expect("valid reference");
        assert_tokens(&c, &[Token::Str("http://a/b?c#d%20e")]);
    }

    #[test]
    fn uri_as_bytes() {
        let c = UriComponents::parse(b"//a/b").expect("valid reference");
        assert_tokens(&c, &[Token::Bytes(b"//a/b")]);
        assert_de_tokens(&c, &[Token::Str("//a/b")]);
    }

    #[test]
    fn parse_errors_are_reported() {
        assert_de_tokens_error::<IriComponents>(
            &[Token::Str("1x:y")],
            "invalid character '1' at position 0 in scheme \
             (scheme must start with an ASCII letter)",
        );
    }
}
