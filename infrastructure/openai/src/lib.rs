pub mod client;
pub mod meal_generator;
