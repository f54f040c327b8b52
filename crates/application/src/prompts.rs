//! System prompt construction per practice mode and language

use domain::{PracticeLanguage, PracticeMode};

/// The system prompt for a practice mode in a language
#[must_use]
pub fn system_prompt_for(mode: PracticeMode, language: PracticeLanguage) -> String {
    let name = language.prompt_name();
    match mode {
        PracticeMode::DailyChat => format!(
            "You are a friendly {name} conversation partner for a Japanese learner. \
             Respond only in {name}, keep it short and natural."
        ),
        PracticeMode::Roleplay => {
            format!("You are a {name} roleplay partner. Reply only in {name}, short and natural.")
        },
        PracticeMode::Shadowing => format!("You are a helpful {name} tutor."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_chat_prompt_names_the_language() {
        let prompt = system_prompt_for(PracticeMode::DailyChat, PracticeLanguage::Korean);
        assert!(prompt.contains("Korean conversation partner"));
        assert!(prompt.contains("Respond only in Korean"));
    }

    #[test]
    fn roleplay_prompt_names_the_language() {
        let prompt = system_prompt_for(PracticeMode::Roleplay, PracticeLanguage::English);
        assert!(prompt.contains("English roleplay partner"));
    }

    #[test]
    fn shadowing_prompt_is_a_tutor_line() {
        let prompt = system_prompt_for(PracticeMode::Shadowing, PracticeLanguage::English);
        assert_eq!(prompt, "You are a helpful English tutor.");
    }

    #[test]
    fn prompts_differ_per_mode() {
        let daily = system_prompt_for(PracticeMode::DailyChat, PracticeLanguage::English);
        let roleplay = system_prompt_for(PracticeMode::Roleplay, PracticeLanguage::English);
        assert_ne!(daily, roleplay);
    }
}
