// Public API for integration tests and the dealer binary

pub mod catalog;
pub mod config;
pub mod engine;
pub mod state;
pub mod store;
pub mod types;
