//! Domain layer for SpeakStudio
//!
//! Contains the core vocabulary of the application: reference sentences for
//! shadowing practice, recognition results, chat messages, roleplay
//! scenarios, and the supported practice languages. This layer has no I/O
//! and no async code.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{shadowing_catalog, sentence_by_id};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
