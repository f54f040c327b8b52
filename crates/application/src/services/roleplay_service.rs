//! Roleplay service - scenario-based conversation
//!
//! The assistant plays a fixed role (airline staff, hotel clerk, client
//! counterpart) defined by a scenario's system prompt. Turns share the chat
//! fallback behavior: a backend failure produces a local reply, not an
//! error.

use std::{fmt, sync::Arc};

use ai_chat::ChatCompletion;
use domain::{ChatMessage, DomainError, RoleplayScenario, builtin_scenarios};
use tracing::instrument;

use crate::error::ApplicationError;
use crate::services::ChatService;

/// Service for roleplay conversation turns
pub struct RoleplayService {
    chat: Arc<dyn ChatCompletion>,
    scenarios: Vec<RoleplayScenario>,
}

impl fmt::Debug for RoleplayService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleplayService")
            .field("scenarios", &self.scenarios.len())
            .finish_non_exhaustive()
    }
}

impl RoleplayService {
    /// Create a service with the built-in scenario set
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self::with_scenarios(chat, builtin_scenarios())
    }

    /// Create a service with a custom scenario set
    pub fn with_scenarios(
        chat: Arc<dyn ChatCompletion>,
        scenarios: Vec<RoleplayScenario>,
    ) -> Self {
        Self { chat, scenarios }
    }

    /// All available scenarios
    #[must_use]
    pub fn scenarios(&self) -> &[RoleplayScenario] {
        &self.scenarios
    }

    /// Look up a scenario by key
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` when the key is unknown.
    pub fn scenario(&self, key: &str) -> Result<&RoleplayScenario, ApplicationError> {
        self.scenarios
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| DomainError::not_found("RoleplayScenario", key).into())
    }

    /// Run one roleplay turn under a scenario's system prompt
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` when the scenario key is unknown.
    /// Backend failures do not error; they degrade to the local fallback
    /// reply.
    #[instrument(skip(self, history), fields(scenario = %key, history_len = history.len()))]
    pub async fn reply(
        &self,
        key: &str,
        history: &[ChatMessage],
    ) -> Result<ChatMessage, ApplicationError> {
        let scenario = self.scenario(key)?;

        let service =
            ChatService::with_system_prompt(self.chat.clone(), scenario.system_prompt.clone());
        Ok(service.chat(history).await)
    }
}
