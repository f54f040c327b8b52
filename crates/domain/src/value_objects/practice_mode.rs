//! Practice mode value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three practice modes offered by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// Free-form conversation with the assistant
    DailyChat,
    /// Listen to a model sentence and repeat it immediately
    Shadowing,
    /// Scenario-based conversation with an assigned role
    Roleplay,
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DailyChat => "daily_chat",
            Self::Shadowing => "shadowing",
            Self::Roleplay => "roleplay",
        };
        f.write_str(name)
    }
}
