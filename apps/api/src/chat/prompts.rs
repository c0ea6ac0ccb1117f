// All model prompt constants for the chat module.

/// System prompt framing the game for every chat-suggestion call.
pub const CHAT_SYSTEM_PROMPT: &str = "You are an AI assistant in a multiplayer drawing guessing game called Drawsy.
In this game, one player draws while others try to guess what they're drawing through chat messages.
Your role is to respond to chat messages in a way that enhances the social experience without giving away answers.

Key rules:
- Never reveal or hint at what's being drawn
- Keep responses under 12 words
- Be natural and conversational
- Match the requested mood/tone
- Focus on the social aspect and game experience
- Respond to player emotions and observations about the drawing process";

/// Chat prompt template. Replace `{message}`, `{instruction}`, and `{mood}`
/// before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = r#"A player in the drawing game just said: "{message}"

{instruction}

Generate a brief, {mood} response that adds to the conversation."#;

pub const CHAT_MAX_TOKENS: u32 = 25;
pub const CHAT_TEMPERATURE: f32 = 0.8;

/// Mood-specific steering line inserted into the chat prompt. Unknown moods
/// get the encouraging instruction, matching the selector's default.
pub fn mood_instruction(mood: &str) -> &'static str {
    match mood {
        "curious" => {
            "Show genuine interest and wonder. Ask thoughtful questions about the drawing process."
        }
        "playful" => "Be fun and energetic. Add excitement and humor to keep the game lively.",
        _ => "Be supportive and motivating. Cheer players on and boost their confidence.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_instruction_covers_known_moods() {
        assert!(mood_instruction("curious").contains("interest"));
        assert!(mood_instruction("playful").contains("energetic"));
        assert!(mood_instruction("encouraging").contains("supportive"));
    }

    #[test]
    fn test_unknown_mood_gets_encouraging_instruction() {
        assert_eq!(mood_instruction("zany"), mood_instruction("encouraging"));
    }

    #[test]
    fn test_chat_template_placeholders_fill_cleanly() {
        let prompt = CHAT_PROMPT_TEMPLATE
            .replace("{message}", "nice circle")
            .replace("{instruction}", mood_instruction("playful"))
            .replace("{mood}", "playful");
        assert!(prompt.contains("nice circle"));
        assert!(prompt.contains("playful response"));
        assert!(!prompt.contains('{'), "no unfilled placeholders");
    }
}
