pub mod food_partners;
pub mod users;
