//! Canned chat replies keyed by (mood, context).
//!
//! Moods form a closed set; unknown mood tags resolve to `Encouraging`
//! instead of failing. Contexts always come from the classifier, so the
//! (mood, context) lookup is total by construction.

use rand::Rng;

use crate::chat::classifier::{classify, MessageContext};

/// Response-tone tag requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Encouraging,
    Curious,
    Playful,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Encouraging => "encouraging",
            Mood::Curious => "curious",
            Mood::Playful => "playful",
        }
    }
}

/// Resolves a wire-format mood tag to a known mood.
pub fn resolve_mood(tag: &str) -> Mood {
    match tag {
        "encouraging" => Mood::Encouraging,
        "curious" => Mood::Curious,
        "playful" => Mood::Playful,
        // Unknown mood tag: degrade to the default rather than erroring
        _ => Mood::Encouraging,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response tables (one pool per mood and context)
// ────────────────────────────────────────────────────────────────────────────

const ENCOURAGING_DRAWING: &[&str] = &[
    "Keep up the amazing drawing!",
    "You're doing great!",
    "Nice work so far!",
];
const ENCOURAGING_GUESSING: &[&str] = &[
    "Great guess!",
    "Keep trying!",
    "You're on the right track!",
];
const ENCOURAGING_GENERAL: &[&str] = &["Looking good!", "Great effort!", "Keep it up!"];

const CURIOUS_DRAWING: &[&str] = &[
    "Interesting shape!",
    "What could that be?",
    "I wonder what you're creating?",
];
const CURIOUS_GUESSING: &[&str] = &[
    "Hmm, what is it?",
    "That's intriguing!",
    "Curious to see more!",
];
const CURIOUS_GENERAL: &[&str] = &[
    "What's happening here?",
    "This looks interesting!",
    "Tell me more!",
];

const PLAYFUL_DRAWING: &[&str] = &[
    "Ooh, mystery drawing!",
    "Plot twist incoming!",
    "This is getting exciting!",
];
const PLAYFUL_GUESSING: &[&str] = &[
    "The suspense is real!",
    "Fun guessing game!",
    "What a puzzle!",
];
const PLAYFUL_GENERAL: &[&str] = &["Fun times ahead!", "This is awesome!", "Love the energy!"];

/// The response pool for a (mood, context) pair.
///
/// Both enums are closed and every arm returns a non-empty table, so this
/// lookup never misses.
pub fn response_pool(mood: Mood, context: MessageContext) -> &'static [&'static str] {
    match (mood, context) {
        (Mood::Encouraging, MessageContext::DrawingProgress) => ENCOURAGING_DRAWING,
        (Mood::Encouraging, MessageContext::Guessing) => ENCOURAGING_GUESSING,
        (Mood::Encouraging, MessageContext::General) => ENCOURAGING_GENERAL,
        (Mood::Curious, MessageContext::DrawingProgress) => CURIOUS_DRAWING,
        (Mood::Curious, MessageContext::Guessing) => CURIOUS_GUESSING,
        (Mood::Curious, MessageContext::General) => CURIOUS_GENERAL,
        (Mood::Playful, MessageContext::DrawingProgress) => PLAYFUL_DRAWING,
        (Mood::Playful, MessageContext::Guessing) => PLAYFUL_GUESSING,
        (Mood::Playful, MessageContext::General) => PLAYFUL_GENERAL,
    }
}

/// Picks one canned response for a mood tag and classified context.
pub fn select_response(mood_tag: &str, context: MessageContext, rng: &mut impl Rng) -> String {
    let pool = response_pool(resolve_mood(mood_tag), context);
    pool[rng.gen_range(0..pool.len())].to_string()
}

/// Produces one canned response per requested mood, classifying the message
/// once.
///
/// Output length is `min(count, moods.len())`; position i is drawn from the
/// pool for `moods[i]`, so the caller's mood order carries through.
pub fn select_many(
    message: &str,
    moods: &[String],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let context = classify(message);
    moods
        .iter()
        .take(count)
        .map(|mood| select_response(mood, context, rng))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
