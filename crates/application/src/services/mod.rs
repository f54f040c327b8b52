//! Practice services

mod chat_service;
mod roleplay_service;
mod shadowing_service;

pub use chat_service::ChatService;
pub use roleplay_service::RoleplayService;
pub use shadowing_service::{ShadowingEvaluation, ShadowingService};
