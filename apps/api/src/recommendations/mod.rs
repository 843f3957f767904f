// Recommendation generation from assessment score metadata.

pub mod generator;
pub mod handlers;
pub mod prompts;
