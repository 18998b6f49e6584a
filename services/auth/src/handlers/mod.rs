pub mod partner;
pub mod user;
