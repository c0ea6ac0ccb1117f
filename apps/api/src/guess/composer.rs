//! Canned quips for wrong guesses, plus at most one context suffix keyed
//! off the guess shape.

use rand::Rng;

// Base templates. Each is a complete standalone response; suffixes are
// appended, never interpolated.
const FUNNY_TEMPLATES: &[&str] = &[
    "Close! But not quite there yet!",
    "Nice try! Keep those creative juices flowing!",
    "Ooh, interesting guess! But let's try again!",
    "You're thinking outside the box! I like it!",
    "Hmm, that's a unique perspective!",
    "Getting warmer... or maybe colder? 🤔",
    "I see where you're going with that!",
    "Creative thinking! But let's aim a bit differently!",
    "That would make for an interesting drawing too!",
    "Points for creativity! Now let's get the right answer!",
];

const LONG_GUESS_SUFFIX: &str = " That's quite a long word you're thinking of!";
const ONE_LETTER_SUFFIX: &str = " Just one letter? Let's think bigger!";
const OVERLAP_SUFFIX: &str = " You've got some letters right!";

/// Longest guess (in characters) before the long-word suffix kicks in.
const LONG_GUESS_CHARS: usize = 10;

/// Composes a canned response to a wrong guess.
///
/// One base template is picked uniformly at random, skipping any template
/// that happens to contain the correct word (the response must never reveal
/// it). Exactly one suffix rule applies, checked in priority order: long
/// guess, single-letter guess, guess-contained-in-answer. Never fails.
pub fn compose_funny_response(guess: &str, correct_word: &str, rng: &mut impl Rng) -> String {
    let base = pick_template(correct_word, rng);

    let guess_chars = guess.chars().count();
    if guess_chars > LONG_GUESS_CHARS {
        return format!("{base}{LONG_GUESS_SUFFIX}");
    }
    if guess_chars == 1 {
        return format!("{base}{ONE_LETTER_SUFFIX}");
    }
    if correct_word.to_lowercase().contains(&guess.to_lowercase()) {
        return format!("{base}{OVERLAP_SUFFIX}");
    }
    base.to_string()
}

/// Picks a base template that does not contain the correct word.
fn pick_template(correct_word: &str, rng: &mut impl Rng) -> &'static str {
    let correct_lower = correct_word.to_lowercase();
    let safe: Vec<&'static str> = FUNNY_TEMPLATES
        .iter()
        .copied()
        .filter(|t| !t.to_lowercase().contains(&correct_lower))
        .collect();

    // The filter can only empty the pool if every template mentions the
    // answer; fall back to the full list in that case.
    let pool: &[&'static str] = if safe.is_empty() { FUNNY_TEMPLATES } else { &safe };
    pool[rng.gen_range(0..pool.len())]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
