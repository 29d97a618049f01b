pub mod matcher;
pub mod variants;
