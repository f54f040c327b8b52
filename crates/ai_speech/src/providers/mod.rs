//! Speech provider adapters

pub mod fallback;
pub mod neural;
pub mod recognizer;
pub mod translate;
