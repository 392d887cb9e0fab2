//! Caller prompt formatting.
//!
//! Turning a ball into speech happens in two steps: [`to_spoken_form`] spells
//! the number out ("N31" becomes "N-thirty-one"), then the caller mode wraps
//! that spoken form in a nickname or a phrase template.

use crate::ball::{BallId, TOTAL_BALLS};
use crate::caller_mode::CallerMode;
use crate::calls::{KID_FRIENDLY_PHRASES, PIRATE_PHRASES, fill_template, nickname};
use crate::random::{IndexSource, RandomIndex};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell out a ball number in English, e.g. 21 -> "twenty-one".
///
/// Returns `None` outside 1-75.
pub fn number_to_words(number: u32) -> Option<String> {
    if number == 0 || number as usize > TOTAL_BALLS {
        return None;
    }
    let n = number as usize;
    if n < 20 {
        return Some(ONES[n].to_string());
    }
    let tens = TENS[n / 10 - 2];
    match n % 10 {
        0 => Some(tens.to_string()),
        ones => Some(format!("{}-{}", tens, ONES[ones])),
    }
}

/// Split an identifier into its leading letters and the remainder.
fn split_ball_id(ball_id: &str) -> (&str, &str) {
    let trimmed = ball_id.trim();
    let split_at = trimmed
        .find(|c: char| !c.is_alphabetic())
        .unwrap_or(trimmed.len());
    trimmed.split_at(split_at)
}

/// Numeric part of an identifier, if it has one.
fn ball_number(ball_id: &str) -> Option<u32> {
    split_ball_id(ball_id).1.parse().ok()
}

/// Render an identifier as `<Letter>-<NumberInWords>`.
///
/// Malformed input never fails: a number outside 1-75 keeps its digits, and
/// an identifier with no numeric part comes back trimmed but otherwise
/// untouched.
pub fn to_spoken_form(ball_id: &str) -> String {
    let (letter, digits) = split_ball_id(ball_id);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ball_id.trim().to_string();
    }

    let words = digits
        .parse::<u32>()
        .ok()
        .and_then(number_to_words)
        .unwrap_or_else(|| digits.to_string());
    if letter.is_empty() {
        words
    } else {
        format!("{}-{}", letter, words)
    }
}

/// Spoken form of a validated ball.
pub fn spoken_form(ball: BallId) -> String {
    to_spoken_form(&ball.to_string())
}

/// Pick a template uniformly and fill it; with no templates, the spoken form.
fn pick_phrase(templates: &[String], spoken: &str, source: &mut dyn IndexSource) -> String {
    if templates.is_empty() {
        return spoken.to_string();
    }
    let index = source.next_index(templates.len()).min(templates.len() - 1);
    fill_template(&templates[index], spoken)
}

/// Builds announcement text for drawn balls.
///
/// Holds its own index source so phrase selection is independent of the
/// draw order.
pub struct PromptFormatter {
    source: Box<dyn IndexSource>,
    kid_friendly: Vec<String>,
    pirate: Vec<String>,
}

impl PromptFormatter {
    pub fn new(source: Box<dyn IndexSource>) -> Self {
        Self {
            source,
            kid_friendly: KID_FRIENDLY_PHRASES.iter().map(|s| s.to_string()).collect(),
            pirate: PIRATE_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(Box::new(RandomIndex::new(seed)))
    }

    /// Replace the phrase templates. An empty list keeps the built-in set.
    pub fn with_phrases(mut self, kid_friendly: Vec<String>, pirate: Vec<String>) -> Self {
        if !kid_friendly.is_empty() {
            self.kid_friendly = kid_friendly;
        }
        if !pirate.is_empty() {
            self.pirate = pirate;
        }
        self
    }

    /// Build the prompt for `ball_id` in the given mode.
    pub fn format_prompt(&mut self, ball_id: &str, mode: CallerMode) -> String {
        let spoken = to_spoken_form(ball_id);
        match mode {
            CallerMode::Plain => spoken,
            CallerMode::Traditional => match ball_number(ball_id).and_then(nickname) {
                Some(name) => format!("{}! That's {}", name, spoken),
                None => spoken,
            },
            CallerMode::KidFriendly => {
                pick_phrase(&self.kid_friendly, &spoken, self.source.as_mut())
            }
            CallerMode::Pirate => pick_phrase(&self.pirate, &spoken, self.source.as_mut()),
        }
    }

    /// Prompt for a validated ball.
    pub fn prompt_for(&mut self, ball: BallId, mode: CallerMode) -> String {
        self.format_prompt(&ball.to_string(), mode)
    }
}

impl Default for PromptFormatter {
    fn default() -> Self {
        Self::with_seed(None)
    }
}
