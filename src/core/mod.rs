pub mod converter;
pub mod engine;
pub mod tables;
pub mod types;
