//! Splitting `authority` into userinfo, host and port.
//!
//! An IP literal host (`[...]`) is kept whole, and the port starts after the
//! closing bracket, since the address itself contains colons. Any other
//! host ends at the first `:`.

use core::ops::Range;

use crate::parser::str::find;

/// Byte ranges of the authority parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorityRanges {
    /// Userinfo, excluding the trailing `@`.
    pub(crate) userinfo: Option<Range<usize>>,
    /// Host.
    pub(crate) host: Range<usize>,
    /// Port, excluding the leading `:`.
    pub(crate) port: Option<Range<usize>>,
}

/// Decomposes the authority into `(userinfo, host, port)` ranges.
///
/// The userinfo ends at the first `@`. A host starting with `[` runs through
/// the matching `]` (IP literal), otherwise it ends at the first `:`.
#[must_use]
pub(crate) fn decompose_authority(authority: &[u8]) -> AuthorityRanges {
    let (userinfo, host_start) = match find(authority, b'@') {
        Some(at) => (Some(0..at), at + 1),
        None => (None, 0),
    };
    let host_port = &authority[host_start..];

    let ip_literal_end = if host_port.first() == Some(&b'[') {
        find(host_port, b']').map(|close| close + 1)
    } else {
        None
    };
    let colon = match ip_literal_end {
        Some(end) => match host_port.get(end) {
            Some(b':') => Some(end),
            // Junk after `]` stays part of the host.
            Some(_) => find(&host_port[end..], b':').map(|pos| pos + end),
            None => None,
        },
        None => find(host_port, b':'),
    };

    match colon {
        Some(colon) => AuthorityRanges {
            userinfo,
            host: host_start..(host_start + colon),
            port: Some((host_start + colon + 1)..authority.len()),
        },
        None => AuthorityRanges {
            userinfo,
            host: host_start..authority.len(),
            port: None,
        },
    }
}
