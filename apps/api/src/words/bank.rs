//! Immutable topic-to-word tables for the drawing game.
//!
//! Built once at startup and shared read-only across request tasks. Unknown
//! topic keys resolve to `FALLBACK_TOPIC`, which the canonical bank always
//! carries, so lookups are total.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

/// Topic substituted whenever a requested topic key is absent from the bank.
pub const FALLBACK_TOPIC: &str = "Objects";

// ────────────────────────────────────────────────────────────────────────────
// Canonical word lists (easy drawable words, grouped by topic)
// ────────────────────────────────────────────────────────────────────────────

const ANIMALS: &[&str] = &[
    "cat", "dog", "fish", "bird", "cow", "pig", "horse", "sheep", "elephant", "giraffe", "lion",
    "tiger", "bear", "rabbit", "mouse", "frog", "snake", "turtle", "duck", "chicken", "butterfly",
    "bee",
];

const FOOD: &[&str] = &[
    "pizza", "burger", "apple", "banana", "cake", "bread", "egg", "cheese", "carrot", "tomato",
    "cookie", "donut", "hotdog", "taco", "sandwich", "ice cream", "cherry", "orange", "grapes",
    "corn",
];

const OBJECTS: &[&str] = &[
    "car", "house", "book", "chair", "table", "phone", "cup", "key", "clock", "lamp", "door",
    "window", "bed", "hat", "shoe", "bag", "pen", "pencil", "camera", "guitar", "ball", "box",
];

const NATURE: &[&str] = &[
    "tree", "flower", "sun", "moon", "star", "cloud", "rain", "snow", "mountain", "river",
    "ocean", "beach", "grass", "leaf", "rock", "fire", "wind", "rainbow", "lightning", "volcano",
    "island", "forest",
];

const SPORTS: &[&str] = &[
    "ball", "bat", "goal", "net", "bike", "skate", "swim", "run", "jump", "kick", "throw",
    "catch", "race", "team", "win", "play", "court", "field", "pool", "track", "gym", "medal",
];

const TRANSPORTATION: &[&str] = &[
    "car", "bus", "train", "plane", "boat", "bike", "truck", "taxi", "ship", "rocket",
    "helicopter", "subway", "scooter", "van", "jeep", "ferry", "yacht", "balloon", "sled",
    "cart", "wagon", "motor",
];

const PROFESSIONS: &[&str] = &[
    "doctor", "teacher", "chef", "police", "nurse", "farmer", "pilot", "artist", "singer",
    "dancer", "writer", "driver", "builder", "baker", "barber", "judge", "lawyer", "soldier",
    "sailor", "actor", "coach", "guide",
];

const ENTERTAINMENT: &[&str] = &[
    "movie", "music", "dance", "game", "toy", "party", "show", "play", "song", "joke", "magic",
    "circus", "puppet", "mask", "costume", "stage", "screen", "ticket", "popcorn", "candy",
    "balloon", "gift",
];

// ────────────────────────────────────────────────────────────────────────────
// WordBank
// ────────────────────────────────────────────────────────────────────────────

/// Immutable topic-to-candidate-words mapping.
///
/// Constructed once (`WordBank::standard()`) and held in `AppState`; tests
/// inject small banks via `WordBank::new`.
#[derive(Debug, Clone)]
pub struct WordBank {
    topics: HashMap<String, Vec<String>>,
}

impl WordBank {
    pub fn new(topics: HashMap<String, Vec<String>>) -> Self {
        Self { topics }
    }

    /// The canonical drawing-game bank: eight topics of easy drawable words.
    pub fn standard() -> Self {
        let mut topics = HashMap::new();
        for (name, words) in [
            ("Animals", ANIMALS),
            ("Food", FOOD),
            ("Objects", OBJECTS),
            ("Nature", NATURE),
            ("Sports", SPORTS),
            ("Transportation", TRANSPORTATION),
            ("Professions", PROFESSIONS),
            ("Entertainment", ENTERTAINMENT),
        ] {
            topics.insert(
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            );
        }
        Self { topics }
    }

    /// Resolves a requested topic to a key that is safe to look up.
    ///
    /// Topics are matched case-sensitively. A key that is absent, or present
    /// but empty, resolves to the fallback topic rather than erroring.
    pub fn resolve_topic<'a>(&self, topic: &'a str) -> &'a str {
        match self.topics.get(topic) {
            Some(words) if !words.is_empty() => topic,
            _ => FALLBACK_TOPIC,
        }
    }

    /// Candidate words for a topic, after fallback resolution.
    ///
    /// Empty only when the fallback topic itself is missing, which cannot
    /// happen with the canonical bank.
    pub fn words(&self, topic: &str) -> &[String] {
        let key = self.resolve_topic(topic);
        self.topics.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All topic keys, sorted so the listing is deterministic.
    pub fn topics(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Picks a topic key uniformly at random. `None` only for an empty bank.
    pub fn random_topic(&self, rng: &mut impl Rng) -> Option<&str> {
        self.topics().choose(rng).copied()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
