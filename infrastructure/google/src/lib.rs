pub mod client;
pub mod custom_search;
pub mod places;
