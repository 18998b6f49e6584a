//! Client layer for the Reelbite services.
//!
//! `api` talks to the auth and food services over HTTP with a session cookie
//! store. `cart`, `checkout` and `payment` hold the ordering flow, with cart
//! persistence injected through [`store::CartStore`] and user-facing messages
//! through [`notify::Notifier`].

pub mod api;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod notify;
pub mod payment;
pub mod store;
