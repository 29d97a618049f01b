// src/lib.rs

pub mod c_api;
pub mod core;
pub mod fuzzy;
pub mod sampler;

pub use crate::core::engine::NumeralEngine;
pub use crate::core::types::NumeralTriple;
