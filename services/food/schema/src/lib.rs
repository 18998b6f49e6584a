//! sea-orm entities for the food service.

pub mod food_partners;
pub mod food_relations;
pub mod foods;
