// All model prompt constants for the words module, with the token and
// temperature budgets used alongside them.

/// Single-word prompt template. Replace `{topic}` before sending.
pub const SINGLE_WORD_PROMPT_TEMPLATE: &str = r#"Generate a single word that would be good for a drawing game in the topic "{topic}".
The word should be:
- Not too easy, not too hard
- Drawable/visual
- Appropriate for all ages
- Between 4-12 letters

Respond with just the word, nothing else."#;

pub const SINGLE_WORD_MAX_TOKENS: u32 = 20;
pub const SINGLE_WORD_TEMPERATURE: f32 = 0.7;

/// Multi-word prompt template. Replace `{count}` and `{topic}` before sending.
pub const MULTI_WORD_PROMPT_TEMPLATE: &str = r#"Generate exactly {count} words for a drawing guessing game in the topic "{topic}".

IMPORTANT REQUIREMENTS:
- Each word must be EASY to draw and recognize
- Words should be simple, common objects/concepts that are visually distinctive
- Avoid abstract concepts, emotions, or things that are hard to visualize
- Perfect for drawing with simple lines and shapes
- Appropriate for all ages
- Between 3-10 letters (shorter is better for drawing games)
- Choose words that have clear, recognizable visual features

Examples of GOOD drawing words: cat, house, tree, car, pizza, sun, flower, book
Examples of BAD drawing words: happiness, democracy, philosophy, quantum, algorithm

Respond with exactly {count} words separated by commas, nothing else."#;

pub const MULTI_WORD_MAX_TOKENS: u32 = 80;
/// Lower temperature than the chat prompts keeps the word lists consistent.
pub const MULTI_WORD_TEMPERATURE: f32 = 0.6;
