pub mod engagement;
pub mod food;
pub mod partner;
