//! Test utilities for Reelbite services.
//!
//! Provides `MockSession` for signing session cookies in router tests.
//! Import in `#[cfg(test)]` blocks and `tests/` only.

pub mod auth;
