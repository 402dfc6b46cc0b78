//! The reasoning pipeline, its settings and its errors.

#[allow(clippy::module_inception)]
mod reasoner;
pub use reasoner::Reasoner;
pub use reasoner::Reasoning;

mod reasoner_config;
pub use reasoner_config::ReasonerConfig;
pub use reasoner_config::DEFAULT_MAX_ARGUMENTS;
pub use reasoner_config::DEFAULT_MAX_DEPTH;

mod reasoning_error;
pub use reasoning_error::ReasoningError;
pub use reasoning_error::ResourceLimit;
