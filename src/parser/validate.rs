//! Validating parsers for non-trusted (possibly invalid) input.

use crate::error::Error;
use crate::parser::char::is_ascii_scheme_continue;
use crate::spec::internal::Text;

/// Validates the scheme and returns it with ASCII letters folded to lowercase.
///
/// The first character must be an ASCII letter, and the following characters
/// must be ASCII letters, digits, `+`, `-`, or `.`.
pub(crate) fn scheme<T: ?Sized + Text>(i: &T) -> Result<T::Owned, Error> {
    let bytes = i.as_bytes();
    let first = match bytes.first() {
        Some(&b) => b,
        None => return Err(Error::empty_scheme()),
    };
    if !first.is_ascii_alphabetic() {
        return Err(Error::invalid_scheme(char_at(i, 0), 0));
    }
    if let Some(pos) = bytes[1..]
        .iter()
        .position(|&b| !is_ascii_scheme_continue(b))
    {
        let pos = pos + 1;
        return Err(Error::invalid_scheme(char_at(i, pos), pos));
    }
    Ok(i.to_ascii_lowercase_owned())
}

/// Returns the character at the given byte offset, for error reporting.
///
/// Bytes not starting a valid character are reported as Latin-1.
#[must_use]
fn char_at<T: ?Sized + Text>(i: &T, pos: usize) -> char {
    i.nonascii_char_at(pos)
        .unwrap_or_else(|| char::from(i.as_bytes()[pos]))
}
