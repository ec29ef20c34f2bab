pub mod actions;
pub mod models;
pub mod workflow;

pub use models::*;
pub use workflow::run_pipeline;
