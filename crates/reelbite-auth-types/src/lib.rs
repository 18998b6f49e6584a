//! Auth types shared across Reelbite services.
//!
//! Provides session-token validation, the session cookie builders, and the
//! `UserIdentity` / `PartnerIdentity` / `AnyIdentity` extractors.

pub mod cookie;
pub mod identity;
pub mod token;
