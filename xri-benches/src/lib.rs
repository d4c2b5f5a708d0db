//! Benchmarks for `xri`.
