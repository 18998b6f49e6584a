//! Domain types shared across all Reelbite services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod account;
pub mod id;
pub mod price;
pub mod relation;
