//! SeaORM entities for the directory tables.

pub mod user;
pub mod user_attribute;
