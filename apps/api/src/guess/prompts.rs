// All model prompt constants for the guess module.

/// Funny-response prompt template. Replace `{guess}` and `{correct_word}`
/// before sending.
pub const FUNNY_RESPONSE_PROMPT_TEMPLATE: &str = r#"In a drawing guessing game, someone guessed "{guess}" but the correct answer is "{correct_word}".
Generate a funny, encouraging response that doesn't reveal the correct answer.
Keep it short, friendly, and humorous. Maximum 20 words."#;

pub const FUNNY_RESPONSE_MAX_TOKENS: u32 = 50;
pub const FUNNY_RESPONSE_TEMPERATURE: f32 = 0.8;
