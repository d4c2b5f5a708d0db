//! Data-driven tests for `xri`.
//!
//! Test cases live in `fixtures/` as JSON files and are run by the
//! integration tests under `tests/`.
