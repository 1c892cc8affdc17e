pub mod error;
pub mod health;
pub mod suggestion;
pub mod tags;
