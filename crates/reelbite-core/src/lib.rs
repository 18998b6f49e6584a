//! Shared service plumbing for Reelbite: error responses, health checks,
//! router layers, serde helpers, and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
