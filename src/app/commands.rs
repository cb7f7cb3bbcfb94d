/// Phrases the user can say (or type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCommand {
    Help,
    ReadAgain,
    RepeatIngredients,
    Start,
    Back,
    Next,
    Previous,
    Pause,
    Reset,
    Quit,
    /// Anything else, lowercased and trimmed. On the home page this is a
    /// recipe name.
    Other(String),
}

impl VoiceCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed == "?" {
            return VoiceCommand::Help;
        }

        let normalized = trimmed
            .trim_matches(|c: char| c.is_ascii_punctuation() || c == '‘' || c == '’')
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "help" | "what can i say" => VoiceCommand::Help,
            "read again" | "read" | "repeat" => VoiceCommand::ReadAgain,
            "repeat the ingredients" | "repeat ingredients" | "ingredients" => {
                VoiceCommand::RepeatIngredients
            }
            "start" => VoiceCommand::Start,
            "back" | "go back" => VoiceCommand::Back,
            "next" | "ready" => VoiceCommand::Next,
            "previous" | "prev" => VoiceCommand::Previous,
            "pause" => VoiceCommand::Pause,
            "reset" => VoiceCommand::Reset,
            "quit" | "exit" => VoiceCommand::Quit,
            _ => VoiceCommand::Other(normalized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms() {
        assert_eq!(VoiceCommand::parse("?"), VoiceCommand::Help);
        assert_eq!(VoiceCommand::parse("Help!"), VoiceCommand::Help);
        assert_eq!(VoiceCommand::parse("  Read   again "), VoiceCommand::ReadAgain);
        assert_eq!(
            VoiceCommand::parse("Repeat the ingredients."),
            VoiceCommand::RepeatIngredients
        );
        assert_eq!(VoiceCommand::parse("START"), VoiceCommand::Start);
        assert_eq!(VoiceCommand::parse("‘ready.’"), VoiceCommand::Next);
        assert_eq!(VoiceCommand::parse("prev"), VoiceCommand::Previous);
        assert_eq!(VoiceCommand::parse("exit"), VoiceCommand::Quit);
    }

    #[test]
    fn unknown_phrase_kept_normalized() {
        assert_eq!(
            VoiceCommand::parse("  Tomato   PASTA "),
            VoiceCommand::Other("tomato pasta".into())
        );
        assert_eq!(VoiceCommand::parse(""), VoiceCommand::Other(String::new()));
    }
}
