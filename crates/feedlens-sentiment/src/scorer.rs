//! Rule-based sentiment scoring over the word lexicon.
//!
//! Each lexicon word contributes its valence, adjusted by a preceding
//! booster, all-caps emphasis, negation within three tokens and a contrastive
//! "but". Exclamation and question marks amplify the sum, which is then
//! normalized into a compound score in `[-1.0, 1.0]`.

use crate::lexicon::{booster, is_negation, Lexicon};
use crate::types::PolarityScores;

/// Emphasis added to an all-caps sentiment word when the text mixes case.
const CAPS_INCR: f64 = 0.733;
/// Scalar applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant: `x / sqrt(x² + ALPHA)`.
const ALPHA: f64 = 15.0;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compound polarity of `text`, rounded to four decimals.
    #[must_use]
    pub fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }

    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = mixed_caps(&tokens);

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, &lowered, i, cap_diff))
            .collect();
        but_check(&lowered, &mut sentiments);

        score_valence(&sentiments, text)
    }

    fn token_valence(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let word = lowered[i].as_str();
        if booster(word).is_some() {
            return 0.0;
        }
        if word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of") {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        if cap_diff && is_all_caps(tokens[i]) {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let prev = i - distance - 1;
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            let mut scalar = booster_scalar(tokens[prev], &lowered[prev], valence, cap_diff);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, distance, i);
        }

        least_check(valence, lowered, i)
    }
}

/// Splits on whitespace and strips surrounding punctuation from each token,
/// unless stripping would leave two characters or fewer (emoticons such as
/// `:)` survive). Single-character tokens are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some tokens are all-caps and some are not.
fn mixed_caps(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn booster_scalar(token: &str, lowered: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        if valence > 0.0 {
            scalar += CAPS_INCR;
        } else {
            scalar -= CAPS_INCR;
        }
    }
    scalar
}

/// Flips valence when a negation sits `distance + 1` tokens before `i`.
///
/// "never so/this" intensifies instead, and "without doubt" is left alone.
fn negation_check(valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
    let at = |back: usize| lowered[i - back].as_str();
    match distance {
        0 if is_negation(at(1)) => valence * NEGATION_SCALAR,
        1 => {
            if at(2) == "never" && matches!(at(1), "so" | "this") {
                valence * 1.25
            } else if at(2) == "without" && at(1) == "doubt" {
                valence
            } else if is_negation(at(2)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if at(3) == "never" && (matches!(at(2), "so" | "this") || matches!(at(1), "so" | "this"))
            {
                valence * 1.25
            } else if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") {
                valence
            } else if is_negation(at(3)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least X" negates X, except in "at least" and "very least".
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i > 0 && lowered[i - 1] == "least" {
        let qualified = i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very");
        if !qualified {
            return valence * NEGATION_SCALAR;
        }
    }
    valence
}

/// Halves sentiment before the first "but" and boosts it after.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but {
            *sentiment *= 0.5;
        } else if index > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    #[allow(clippy::cast_precision_loss)]
    let exclamation_emphasis = exclamations as f64 * EXCLAMATION_WEIGHT;
    exclamation_emphasis + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        };
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round4((neg_sum / total).abs()),
        neu: round4(neu_count / total),
        pos: round4(pos_sum / total),
        compound: round4(compound),
    }
}
