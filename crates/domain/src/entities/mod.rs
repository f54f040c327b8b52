//! Domain entities

mod chat_message;
mod recognition;
mod reference_sentence;
mod roleplay;

pub use chat_message::{ChatMessage, MessageMetadata, MessageRole};
pub use recognition::RecognitionResult;
pub use reference_sentence::{DifficultyTier, ReferenceSentence};
pub use roleplay::{RoleplayScenario, builtin_scenarios};
