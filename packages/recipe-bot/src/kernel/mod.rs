//! Kernel module - external services and their test doubles.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{OpenAIAdapter, PipelineDeps, ReqwestFetcher, WordPressAdapter};
pub use test_dependencies::TestDependencies;
pub use traits::*;
