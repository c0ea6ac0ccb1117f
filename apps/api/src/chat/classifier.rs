//! Buckets a chat message into one of three coarse game contexts via
//! keyword matching.

/// Keywords that signal the sender is talking about the act of drawing.
const DRAWING_KEYWORDS: &[&str] = &["draw", "drawing", "sketch", "line", "shape"];

/// Keywords that signal the sender is guessing at the answer.
const GUESSING_KEYWORDS: &[&str] = &["guess", "think", "looks like", "is it", "what is"];

/// Coarse classification of an incoming chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContext {
    DrawingProgress,
    Guessing,
    General,
}

impl MessageContext {
    /// Stable identifier used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageContext::DrawingProgress => "drawing_progress",
            MessageContext::Guessing => "guessing",
            MessageContext::General => "general",
        }
    }
}

/// Classifies a free-text chat message.
///
/// Matching is case-insensitive substring containment, so "Drawing!" and
/// "guessed" both count. Drawing keywords are checked before guessing
/// keywords; the first matching set wins.
pub fn classify(message: &str) -> MessageContext {
    let lower = message.to_lowercase();
    if DRAWING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        MessageContext::DrawingProgress
    } else if GUESSING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        MessageContext::Guessing
    } else {
        MessageContext::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_message_classifies_as_drawing_progress() {
        assert_eq!(classify("let's draw a sketch"), MessageContext::DrawingProgress);
        assert_eq!(classify("nice line work"), MessageContext::DrawingProgress);
        assert_eq!(classify("what a cool shape"), MessageContext::DrawingProgress);
    }

    #[test]
    fn test_guessing_message_classifies_as_guessing() {
        assert_eq!(
            classify("what is this, I think it's..."),
            MessageContext::Guessing
        );
        assert_eq!(classify("is it a cat?"), MessageContext::Guessing);
        assert_eq!(classify("that looks like a dog"), MessageContext::Guessing);
    }

    #[test]
    fn test_plain_message_classifies_as_general() {
        assert_eq!(classify("hello there"), MessageContext::General);
        assert_eq!(classify(""), MessageContext::General);
    }

    #[test]
    fn test_drawing_wins_over_guessing() {
        // Contains both "think" and "draw"; the drawing set is checked first.
        assert_eq!(
            classify("I think you should draw faster"),
            MessageContext::DrawingProgress
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("DRAW SOMETHING"), MessageContext::DrawingProgress);
        assert_eq!(classify("My GUESS is ready"), MessageContext::Guessing);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "guessing" contains "guess"
        assert_eq!(classify("no more guessing"), MessageContext::Guessing);
    }

    #[test]
    fn test_context_labels() {
        assert_eq!(MessageContext::DrawingProgress.as_str(), "drawing_progress");
        assert_eq!(MessageContext::Guessing.as_str(), "guessing");
        assert_eq!(MessageContext::General.as_str(), "general");
    }
}
