//! Application layer - practice mode services
//!
//! Orchestrates the domain catalog, the scoring pipeline, and the chat and
//! speech adapters into the three practice flows: daily chat, shadowing,
//! and roleplay.

pub mod error;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use prompts::system_prompt_for;
pub use services::*;
