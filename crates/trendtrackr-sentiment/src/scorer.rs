//! Rule-based polarity scorer.
//!
//! Sums per-token valences from the [`Lexicon`], adjusted for boosters,
//! negation, all-caps emphasis, contrastive "but", idioms, and trailing
//! punctuation, then squashes the sum into a compound score in `[-1.0, 1.0]`.

use crate::lexicon::{is_negation, Lexicon, C_INCR, N_SCALAR};
use crate::types::PolarityScores;

/// Normalization constant approximating the maximum expected raw sum.
const NORMALIZATION_ALPHA: f64 = 15.0;
const BUT_BEFORE_SCALE: f64 = 0.5;
const BUT_AFTER_SCALE: f64 = 1.5;
const NEVER_SO_SCALE: f64 = 1.25;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_AMPLIFIER: f64 = 0.96;

/// Score a text with the shared built-in lexicon.
///
/// Returns `0.0` for empty or whitespace-only text.
#[must_use]
pub fn score(text: &str) -> f64 {
    SentimentAnalyzer::default().score(text)
}

/// Full polarity breakdown of a text using the shared built-in lexicon.
#[must_use]
pub fn polarity_scores(text: &str) -> PolarityScores {
    SentimentAnalyzer::default().polarity_scores(text)
}

/// Scorer bound to a lexicon. Cheap to copy; holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl<'a> SentimentAnalyzer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Compound polarity in `[-1.0, 1.0]`.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }

    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = Tokens::new(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let mut sentiments = Vec::with_capacity(tokens.lower.len());
        for (i, lower) in tokens.lower.iter().enumerate() {
            let lower = lower.as_str();
            // Boosters modify their neighbours and carry no valence of their own.
            if self.lexicon.booster(lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && tokens.lower.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, i));
        }

        apply_but_rule(&tokens.lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence_at(&self, tokens: &Tokens<'_>, i: usize) -> f64 {
        let words = &tokens.lower;
        let Some(base) = self.lexicon.valence(&words[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another lexicon word acts as a negator, not a word.
        if words[i] == "no" && words.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        } else if (i > 0 && words[i - 1] == "no")
            || (i > 1 && words[i - 2] == "no")
            || (i > 2 && words[i - 3] == "no" && matches!(words[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if tokens.cap_differential && is_all_caps(tokens.raw[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&words[prev]) {
                continue;
            }
            let mut scalar = self.booster_scalar(tokens, prev, valence);
            // Boosters further away have a weaker effect.
            if start_i == 1 {
                scalar *= 0.95;
            } else if start_i == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, words, start_i, i);
            if start_i == 2 {
                valence = self.idiom_check(valence, words, i);
            }
        }

        least_check(self.lexicon, valence, words, i)
    }

    fn booster_scalar(&self, tokens: &Tokens<'_>, j: usize, valence: f64) -> f64 {
        let Some(mut scalar) = self.lexicon.booster(&tokens.lower[j]) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if tokens.cap_differential && is_all_caps(tokens.raw[j]) {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }

    /// Replace the valence of `words[i]` when it ends or starts a known idiom,
    /// then apply any multi-word booster preceding it. Requires `i >= 3`.
    fn idiom_check(&self, mut valence: f64, words: &[String], i: usize) -> f64 {
        let one_zero = format!("{} {}", words[i - 1], words[i]);
        let two_one_zero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
        let two_one = format!("{} {}", words[i - 2], words[i - 1]);
        let three_two_one = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
        let three_two = format!("{} {}", words[i - 3], words[i - 2]);

        if let Some(v) = [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two]
            .into_iter()
            .find_map(|seq| self.lexicon.idiom(seq))
        {
            valence = v;
        }

        if words.len() > i + 1 {
            let zero_one = format!("{} {}", words[i], words[i + 1]);
            if let Some(v) = self.lexicon.idiom(&zero_one) {
                valence = v;
            }
        }
        if words.len() > i + 2 {
            let zero_one_two = format!("{} {} {}", words[i], words[i + 1], words[i + 2]);
            if let Some(v) = self.lexicon.idiom(&zero_one_two) {
                valence = v;
            }
        }

        for ngram in [&three_two_one, &three_two, &two_one] {
            if let Some(b) = self.lexicon.booster(ngram) {
                valence += b;
            }
        }
        valence
    }
}

/// Tokenised view of one text.
struct Tokens<'t> {
    raw: Vec<&'t str>,
    lower: Vec<String>,
    /// True when some, but not all, tokens are written in capitals.
    cap_differential: bool,
}

impl<'t> Tokens<'t> {
    fn new(text: &'t str) -> Self {
        let raw: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lower = raw.iter().map(|t| t.to_lowercase()).collect();
        let all_caps = raw.iter().filter(|t| is_all_caps(t)).count();
        let cap_differential = all_caps > 0 && all_caps < raw.len();
        Self {
            raw,
            lower,
            cap_differential,
        }
    }

    fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Strip surrounding ASCII punctuation unless that would leave two characters
/// or fewer, which keeps emoticons like `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

fn is_negated(word: &str) -> bool {
    is_negation(word) || word.contains("n't")
}

fn is_so_or_this(word: &str) -> bool {
    word == "so" || word == "this"
}

fn negation_check(valence: f64, words: &[String], start_i: usize, i: usize) -> f64 {
    match start_i {
        0 => {
            if is_negated(&words[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if words[i - 2] == "never" && is_so_or_this(&words[i - 1]) {
                return valence * NEVER_SO_SCALE;
            }
            if words[i - 2] == "without" && words[i - 1] == "doubt" {
                return valence;
            }
            if is_negated(&words[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if words[i - 3] == "never"
                && (is_so_or_this(&words[i - 2]) || is_so_or_this(&words[i - 1]))
            {
                return valence * NEVER_SO_SCALE;
            }
            if words[i - 3] == "without" && (words[i - 2] == "doubt" || words[i - 1] == "doubt") {
                return valence;
            }
            if is_negated(&words[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// "least good" flips polarity; "at least good" and "very least" do not.
fn least_check(lexicon: &Lexicon, valence: f64, words: &[String], i: usize) -> f64 {
    if i == 0 || words[i - 1] != "least" || lexicon.contains(&words[i - 1]) {
        return valence;
    }
    if i > 1 && (words[i - 2] == "at" || words[i - 2] == "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Sentiment after "but" dominates: halve what precedes it, boost what follows.
fn apply_but_rule(words: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= BUT_BEFORE_SCALE;
        } else if idx > but_index {
            *sentiment *= BUT_AFTER_SCALE;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amplifier = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_AMPLIFIER,
    };
    exclamations as f64 * EXCLAMATION_WEIGHT + question_amplifier
}

fn normalize(raw: f64) -> f64 {
    (raw / (raw * raw + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[allow(clippy::cast_precision_loss)]
fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let amplifier = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amplifier;
    } else if sum < 0.0 {
        sum -= amplifier;
    }
    let compound = normalize(sum);

    // Each scored token adds one to its side so neutral tokens weigh in.
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0_usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
