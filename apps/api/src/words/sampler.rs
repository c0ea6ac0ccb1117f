//! Draws exactly `count` words for a topic.
//!
//! When the pool is smaller than the request, the sampler cycles: it draws
//! without replacement from a working copy and refills the copy from the full
//! pool whenever it empties. No word repeats before every pool word has
//! appeared once.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::words::bank::WordBank;

/// Draws exactly `count` words for `topic` (resolved through the bank's
/// fallback rule).
///
/// Algorithm:
/// 1. Pool covers the request: uniform selection of `count` distinct words,
///    order not meaningful.
/// 2. Pool smaller than the request: cycling draw as described in the module
///    docs. Duplicates appear only after the pool is exhausted once.
/// 3. Empty pool: empty result, regardless of `count`. Never fails.
pub fn sample_words(bank: &WordBank, topic: &str, count: usize, rng: &mut impl Rng) -> Vec<String> {
    let pool = bank.words(topic);
    if pool.is_empty() {
        return Vec::new();
    }

    if pool.len() >= count {
        return pool.choose_multiple(rng, count).cloned().collect();
    }

    let mut working: Vec<&String> = pool.iter().collect();
    let mut result = Vec::with_capacity(count);
    while result.len() < count {
        if working.is_empty() {
            working = pool.iter().collect();
        }
        let idx = rng.gen_range(0..working.len());
        result.push(working.swap_remove(idx).clone());
    }
    result
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn make_bank(entries: &[(&str, &[&str])]) -> WordBank {
        let mut topics = HashMap::new();
        for (name, words) in entries {
            topics.insert(
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            );
        }
        WordBank::new(topics)
    }

    fn small_bank() -> WordBank {
        make_bank(&[
            ("Tiny", &["red", "green", "blue"]),
            ("Objects", &["box", "cup", "pen", "hat"]),
        ])
    }

    #[test]
    fn test_exact_count_when_pool_covers_request() {
        let bank = WordBank::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let words = sample_words(&bank, "Animals", 5, &mut rng);
        assert_eq!(words.len(), 5);

        let distinct: HashSet<&String> = words.iter().collect();
        assert_eq!(distinct.len(), 5, "no duplicates when the pool is big enough");

        let pool: HashSet<&String> = bank.words("Animals").iter().collect();
        for word in &words {
            assert!(pool.contains(word), "{word} must come from the Animals pool");
        }
    }

    #[test]
    fn test_count_equal_to_pool_is_a_permutation() {
        let bank = small_bank();
        let mut rng = StdRng::seed_from_u64(7);
        let words = sample_words(&bank, "Tiny", 3, &mut rng);
        let got: HashSet<&str> = words.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = ["red", "green", "blue"].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let bank = WordBank::standard();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sample_words(&bank, "Food", 0, &mut rng).is_empty());
    }

    #[test]
    fn test_empty_pool_degrades_to_empty_result() {
        // The fallback topic itself is empty, so there is nothing to draw.
        let bank = make_bank(&[("Objects", &[])]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sample_words(&bank, "Objects", 5, &mut rng).is_empty());

        let bank = WordBank::new(HashMap::new());
        assert!(sample_words(&bank, "Anything", 5, &mut rng).is_empty());
    }

    #[test]
    fn test_unknown_topic_samples_from_fallback_pool() {
        let bank = small_bank();
        // Both resolve to the same pool, so with the same seed the unknown
        // topic must reproduce the fallback draw exactly.
        let from_unknown = sample_words(
            &bank,
            "NotATopic",
            3,
            &mut StdRng::seed_from_u64(11),
        );
        let from_fallback = sample_words(&bank, "Objects", 3, &mut StdRng::seed_from_u64(11));
        assert_eq!(from_unknown, from_fallback);
    }

    #[test]
    fn test_cycling_reaches_exact_count() {
        let bank = small_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let words = sample_words(&bank, "Tiny", 8, &mut rng);
        assert_eq!(words.len(), 8);
    }

    #[test]
    fn test_cycling_exhausts_pool_before_repeating() {
        let bank = small_bank();
        let pool: HashSet<&str> = ["red", "green", "blue"].into_iter().collect();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let words = sample_words(&bank, "Tiny", 8, &mut rng);

            // Every full cycle is a permutation of the pool; the tail is a
            // distinct prefix of the next cycle.
            for chunk in words.chunks(3) {
                let distinct: HashSet<&str> = chunk.iter().map(String::as_str).collect();
                assert_eq!(
                    distinct.len(),
                    chunk.len(),
                    "seed {seed}: repeat before the pool was exhausted: {words:?}"
                );
                for word in &distinct {
                    assert!(pool.contains(word), "seed {seed}: {word} not in pool");
                }
            }
        }
    }

    #[test]
    fn test_cycling_covers_every_pool_word_first() {
        let bank = small_bank();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let words = sample_words(&bank, "Tiny", 7, &mut rng);
            let first_cycle: HashSet<&str> = words[..3].iter().map(String::as_str).collect();
            assert_eq!(
                first_cycle.len(),
                3,
                "seed {seed}: first three draws must cover the whole pool"
            );
        }
    }

    #[test]
    fn test_single_word_draw() {
        let bank = WordBank::standard();
        let mut rng = StdRng::seed_from_u64(3);
        let words = sample_words(&bank, "Nature", 1, &mut rng);
        assert_eq!(words.len(), 1);
        assert!(bank.words("Nature").contains(&words[0]));
    }
}
