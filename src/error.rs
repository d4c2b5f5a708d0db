//! Errors.

use core::fmt;

/// Component of a reference, as named in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// `scheme`.
    Scheme,
    /// `query`.
    Query,
    /// `fragment`.
    Fragment,
}

impl Component {
    /// Returns the component name.
    #[must_use]
    fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A scheme contains a character not allowed by the scheme syntax, or does
    /// not start with an ASCII letter.
    InvalidScheme,
    /// A scheme is present but empty.
    EmptyScheme,
    /// A character given as "safe" for percent encoding is not a reserved
    /// character.
    UnsafeCharacter,
    /// A percent-encoded octet is truncated or has non-hexadecimal digits.
    InvalidPercentEncoding,
    /// Percent-decoded text is not valid UTF-8.
    InvalidUtf8,
    /// A component that must be absent or non-empty was given as empty.
    EmptyComponent,
}

/// Error on parsing, building, or percent encoding and decoding.
///
/// Errors never carry partial output. An operation that fails produces no
/// result at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorRepr {
    /// Invalid character in a scheme.
    InvalidScheme {
        /// Offending character.
        character: char,
        /// Byte offset of the character in the scheme.
        position: usize,
    },
    /// Empty scheme.
    EmptyScheme,
    /// Non-reserved character in a "safe" set.
    UnsafeCharacter {
        /// Offending character.
        character: char,
        /// Byte offset of the character in the safe set.
        position: usize,
    },
    /// Malformed percent-encoded octet.
    InvalidPercentEncoding {
        /// Byte offset of the `%` character.
        position: usize,
        /// Bytes following the `%` character (at most two).
        octet: [u8; 2],
        /// Number of valid bytes in `octet`.
        len: u8,
    },
    /// Invalid UTF-8 after decoding.
    InvalidUtf8 {
        /// Length of the valid prefix in decoded bytes.
        valid_up_to: usize,
    },
    /// Empty component.
    EmptyComponent(Component),
}

impl Error {
    /// Creates an error for an invalid scheme character.
    #[must_use]
    pub(crate) fn invalid_scheme(character: char, position: usize) -> Self {
        Self {
            repr: ErrorRepr::InvalidScheme {
                character,
                position,
            },
        }
    }

    /// Creates an error for an empty scheme.
    #[must_use]
    pub(crate) fn empty_scheme() -> Self {
        Self {
            repr: ErrorRepr::EmptyScheme,
        }
    }

    /// Creates an error for a non-reserved character in a safe set.
    #[must_use]
    pub(crate) fn unsafe_character(character: char, position: usize) -> Self {
        Self {
            repr: ErrorRepr::UnsafeCharacter {
                character,
                position,
            },
        }
    }

    /// Creates an error for a malformed percent-encoded octet.
    ///
    /// `following` is the rest of the input after the `%` character.
    #[must_use]
    pub(crate) fn invalid_percent_encoding(position: usize, following: &[u8]) -> Self {
        let mut octet = [0; 2];
        let len = following.len().min(2);
        octet[..len].copy_from_slice(&following[..len]);
        Self {
            repr: ErrorRepr::InvalidPercentEncoding {
                position,
                octet,
                len: len as u8,
            },
        }
    }

    /// Creates an error for invalid UTF-8 in decoded text.
    #[must_use]
    pub(crate) fn invalid_utf8(valid_up_to: usize) -> Self {
        Self {
            repr: ErrorRepr::InvalidUtf8 { valid_up_to },
        }
    }

    /// Creates an error for an empty component.
    #[must_use]
    pub(crate) fn empty_component(component: Component) -> Self {
        Self {
            repr: ErrorRepr::EmptyComponent(component),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::InvalidScheme { .. } => ErrorKind::InvalidScheme,
            ErrorRepr::EmptyScheme => ErrorKind::EmptyScheme,
            ErrorRepr::UnsafeCharacter { .. } => ErrorKind::UnsafeCharacter,
            ErrorRepr::InvalidPercentEncoding { .. } => ErrorKind::InvalidPercentEncoding,
            ErrorRepr::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            ErrorRepr::EmptyComponent(_) => ErrorKind::EmptyComponent,
        }
    }

    /// Returns the byte position the error refers to, if any.
    ///
    /// * For [`ErrorKind::InvalidScheme`], this is the offset in the scheme.
    /// * For [`ErrorKind::UnsafeCharacter`], this is the offset in the safe set.
    /// * For [`ErrorKind::InvalidPercentEncoding`], this is the offset of the
    ///   `%` character in the input.
    /// * For [`ErrorKind::InvalidUtf8`], this is the length of the valid
    ///   prefix of the decoded bytes.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.repr {
            ErrorRepr::InvalidScheme { position, .. }
            | ErrorRepr::UnsafeCharacter { position, .. }
            | ErrorRepr::InvalidPercentEncoding { position, .. } => Some(position),
            ErrorRepr::InvalidUtf8 { valid_up_to } => Some(valid_up_to),
            ErrorRepr::EmptyScheme | ErrorRepr::EmptyComponent(_) => None,
        }
    }

    /// Returns the offending character, if any.
    ///
    /// Bytes of the URI domain are reported as the character of the same
    /// value (i.e. as Latin-1).
    #[must_use]
    pub fn character(&self) -> Option<char> {
        match self.repr {
            ErrorRepr::InvalidScheme { character, .. }
            | ErrorRepr::UnsafeCharacter { character, .. } => Some(character),
            _ => None,
        }
    }

    /// Returns `true` if the error is a percent-encoded octet cut short by the
    /// end of the input.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(
            self.repr,
            ErrorRepr::InvalidPercentEncoding { len, .. } if len < 2
        )
    }

    /// Returns the empty component, if the error is about one.
    #[must_use]
    pub fn component(&self) -> Option<Component> {
        match self.repr {
            ErrorRepr::EmptyScheme => Some(Component::Scheme),
            ErrorRepr::EmptyComponent(component) => Some(component),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::InvalidScheme {
                character,
                position: 0,
            } => write!(
                f,
                "invalid character {:?} at position 0 in scheme \
                 (scheme must start with an ASCII letter)",
                character
            ),
            ErrorRepr::InvalidScheme {
                character,
                position,
            } => write!(
                f,
                "invalid character {:?} at position {} in scheme",
                character, position
            ),
            ErrorRepr::EmptyScheme => {
                f.write_str("scheme cannot be an empty string (but could be absent)")
            }
            ErrorRepr::UnsafeCharacter {
                character,
                position,
            } => write!(
                f,
                "safe characters must be in the set \"!#$&'()*+,/:;=?@[]\" \
                 (found {:?} at position {})",
                character, position
            ),
            ErrorRepr::InvalidPercentEncoding {
                position,
                octet,
                len,
            } => {
                let octet = &octet[..usize::from(len)];
                write!(
                    f,
                    "illegal percent-encoded octet '%{}' at index {}",
                    octet.escape_ascii(),
                    position
                )?;
                if len < 2 {
                    f.write_str(" (premature end of string)")?;
                }
                Ok(())
            }
            ErrorRepr::InvalidUtf8 { valid_up_to } => write!(
                f,
                "percent-decoded text is not valid UTF-8 (valid up to byte {})",
                valid_up_to
            ),
            ErrorRepr::EmptyComponent(component) => write!(
                f,
                "{} cannot be an empty string (but could be absent)",
                component.name()
            ),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
