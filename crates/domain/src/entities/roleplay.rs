//! Roleplay scenario entity

use serde::{Deserialize, Serialize};

use crate::value_objects::PracticeLanguage;

/// A roleplay scenario: who the assistant plays and how the dialog opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleplayScenario {
    /// Stable key, e.g. "airport_checkin"
    pub key: String,
    /// Display label
    pub label: String,
    /// System prompt assigning the assistant's role
    pub system_prompt: String,
    /// Suggested opening line for the learner
    pub opening_line: String,
    /// Language the dialog is held in
    pub language: PracticeLanguage,
}

impl RoleplayScenario {
    /// Create a new scenario
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        system_prompt: impl Into<String>,
        opening_line: impl Into<String>,
        language: PracticeLanguage,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            system_prompt: system_prompt.into(),
            opening_line: opening_line.into(),
            language,
        }
    }
}

/// The built-in scenario set
#[must_use]
pub fn builtin_scenarios() -> Vec<RoleplayScenario> {
    vec![
        RoleplayScenario::new(
            "airport_checkin",
            "Airport: check-in",
            "You are an airline ground staff member. The whole conversation is in Korean. \
             Be polite and concise, keep the dialog realistic, and support the learner's \
             Korean practice. Keep each reply to two or three short sentences.",
            "안녕하세요. 김포행 항공편 체크인하고 싶어요.",
            PracticeLanguage::Korean,
        ),
        RoleplayScenario::new(
            "hotel_checkin",
            "Hotel: check-in",
            "You are a hotel front desk clerk. The whole conversation is in Korean. \
             Walk through check-in, identity confirmation, payment, and directions inside \
             the hotel. Keep each reply to two or three short sentences.",
            "안녕하세요. 오늘 체크인 예약했어요.",
            PracticeLanguage::Korean,
        ),
        RoleplayScenario::new(
            "biz_meeting",
            "Business meeting: requirements",
            "You are the counterpart at a Korean client company. The whole conversation is \
             in Korean. Confirm the meeting goal, schedule, required materials, and next \
             actions politely. Keep each reply to two or three short sentences.",
            "안녕하세요. 오늘 미팅의 목적을 먼저 확인하고 싶습니다.",
            PracticeLanguage::Korean,
        ),
        RoleplayScenario::new(
            "hotel_front_desk_en",
            "Hotel front desk (English)",
            "You are a hotel front desk staff member. Be polite and concise. Ask for the \
             guest's name and reservation details. Keep each reply short and natural.",
            "Hi, I have a reservation for tonight.",
            PracticeLanguage::English,
        ),
        RoleplayScenario::new(
            "customer_support_en",
            "Customer support (English)",
            "You are a customer support agent. Empathize and guide the customer to a \
             solution step by step. Keep each reply short and natural.",
            "Hello, my app keeps crashing on startup.",
            PracticeLanguage::English,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scenarios_have_unique_keys() {
        let scenarios = builtin_scenarios();
        let mut keys: Vec<&str> = scenarios.iter().map(|s| s.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), scenarios.len());
    }

    #[test]
    fn builtin_scenarios_cover_both_languages() {
        let scenarios = builtin_scenarios();
        assert!(scenarios
            .iter()
            .any(|s| s.language == PracticeLanguage::Korean));
        assert!(scenarios
            .iter()
            .any(|s| s.language == PracticeLanguage::English));
    }

    #[test]
    fn scenarios_have_prompts_and_openings() {
        for scenario in builtin_scenarios() {
            assert!(!scenario.system_prompt.is_empty(), "{}", scenario.key);
            assert!(!scenario.opening_line.is_empty(), "{}", scenario.key);
        }
    }
}
