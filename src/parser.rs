//! Parser.

pub(crate) mod char;
pub(crate) mod split;
pub(crate) mod str;
pub(crate) mod validate;
