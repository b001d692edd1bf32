//! Built-in valence lexicon and modifier word lists.
//!
//! Valences use the -4.0..=4.0 human-rated scale of the VADER lexicon. Keys
//! are lowercase; emoticons are stored verbatim apart from case.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Word and emoticon valences in the VADER lexicon file format: one entry
/// per line, token then mean valence, tab-separated. Later columns (standard
/// deviation, raw ratings) are ignored.
const VADER_LEXICON: &str = include_str!("../data/vader_lexicon.txt");

/// Valence change applied by an intensifying booster word.
pub(crate) const B_INCR: f64 = 0.293;
/// Valence change applied by a dampening booster word.
pub(crate) const B_DECR: f64 = -0.293;
/// Extra valence for an all-caps word in mixed-case text.
pub(crate) const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub(crate) const N_SCALAR: f64 = -0.74;

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerable", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("effing", B_INCR),
    ("enormous", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptional", B_INCR),
    ("exceptionally", B_INCR),
    ("extreme", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("flipping", B_INCR),
    ("flippin", B_INCR),
    ("frackin", B_INCR),
    ("fracking", B_INCR),
    ("freakin", B_INCR),
    ("freaking", B_INCR),
    ("frickin", B_INCR),
    ("fricking", B_INCR),
    ("friggin", B_INCR),
    ("frigging", B_INCR),
    ("fuckin", B_INCR),
    ("fucking", B_INCR),
    ("fuggin", B_INCR),
    ("fugging", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredible", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("major", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("total", B_INCR),
    ("totally", B_INCR),
    ("tremendous", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utter", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("occasional", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarce", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Multi-word idioms whose valence replaces that of their final word.
pub(crate) const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

static SHARED: LazyLock<Lexicon> = LazyLock::new(Lexicon::builtin);

/// Immutable lookup tables used by the scorer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    idioms: HashMap<String, f64>,
}

impl Lexicon {
    /// Process-wide built-in lexicon, built on first use and never mutated.
    #[must_use]
    pub fn shared() -> &'static Lexicon {
        &SHARED
    }

    /// Build a lexicon from the compiled-in VADER valences.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_vader_str(VADER_LEXICON)
    }

    /// Build a lexicon from text in the VADER lexicon file format, such as a
    /// newer release of `vader_lexicon.txt`. Blank lines are skipped and
    /// malformed lines are logged and skipped.
    #[must_use]
    pub fn from_vader_str(text: &str) -> Self {
        Self::from_entries(parse_vader_lines(text))
    }

    /// Build a lexicon from custom valences. Booster and idiom tables are the
    /// built-in ones.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let valences = entries
            .into_iter()
            .map(|(word, valence)| (word.to_lowercase(), valence))
            .collect();
        let boosters = BOOSTERS
            .iter()
            .map(|&(word, scalar)| (word.to_string(), scalar))
            .collect();
        let idioms = IDIOMS
            .iter()
            .map(|&(phrase, valence)| (phrase.to_string(), valence))
            .collect();
        Self {
            valences,
            boosters,
            idioms,
        }
    }

    /// Valence of a lowercase token, if it is in the lexicon.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    pub(crate) fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub(crate) fn idiom(&self, phrase: &str) -> Option<f64> {
        self.idioms.get(phrase).copied()
    }
}

fn parse_vader_lines(text: &str) -> impl Iterator<Item = (&str, f64)> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            let mut cols = line.split('\t');
            let word = cols.next().map(str::trim).filter(|w| !w.is_empty());
            let valence = cols.next().and_then(|v| v.trim().parse::<f64>().ok());
            match (word, valence) {
                (Some(word), Some(valence)) => Some((word, valence)),
                _ => {
                    tracing::warn!(line = idx + 1, "skipping malformed lexicon line");
                    None
                }
            }
        })
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn builtin_lines() -> impl Iterator<Item = &'static str> {
        VADER_LEXICON.lines().filter(|line| !line.trim().is_empty())
    }

    #[test]
    fn every_builtin_line_parses() {
        let lines = builtin_lines().count();
        assert_eq!(parse_vader_lines(VADER_LEXICON).count(), lines);
        assert!(lines > 2_000, "lexicon unexpectedly small: {lines}");
    }

    #[test]
    fn builtin_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (word, _) in parse_vader_lines(VADER_LEXICON) {
            assert!(seen.insert(word), "duplicate lexicon entry: {word}");
        }
        assert_eq!(Lexicon::shared().len(), seen.len());
    }

    #[test]
    fn valences_within_scale() {
        for (word, valence) in parse_vader_lines(VADER_LEXICON) {
            assert!(
                (-4.0..=4.0).contains(&valence),
                "valence out of range for {word}: {valence}"
            );
        }
    }

    #[test]
    fn keys_are_lowercase() {
        for (word, _) in parse_vader_lines(VADER_LEXICON) {
            assert_eq!(word, word.to_lowercase(), "lexicon key not lowercase: {word}");
        }
    }

    #[test]
    fn common_review_words_carry_vader_valences() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.valence("ok"), Some(1.2));
        assert_eq!(lexicon.valence("okay"), Some(0.9));
        assert_eq!(lexicon.valence("died"), Some(-2.6));
        assert_eq!(lexicon.valence("love"), Some(3.2));
        assert_eq!(lexicon.valence("hate"), Some(-2.7));
        assert_eq!(lexicon.valence(":)"), Some(2.0));
    }

    #[test]
    fn vader_file_format_ignores_trailing_columns() {
        let lexicon = Lexicon::from_vader_str(
            "good\t1.9\t0.9434\t[2, 1, 2, 3, 2, 1, 2, 2, 2, 2]\n\nbroken line\n:-(\t-1.5\t0.5\t[-1, -2]\n",
        );
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.valence("good"), Some(1.9));
        assert_eq!(lexicon.valence(":-("), Some(-1.5));
        assert!(!lexicon.contains("broken"));
    }

    #[test]
    fn shared_lexicon_is_loaded_once() {
        let a: *const Lexicon = Lexicon::shared();
        let b: *const Lexicon = Lexicon::shared();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_entries_are_lowercased() {
        let lexicon = Lexicon::from_entries([("Shiny", 1.5)]);
        assert_eq!(lexicon.valence("shiny"), Some(1.5));
        assert!(lexicon.valence("Shiny").is_none());
    }

    #[test]
    fn negation_list_matches_contractions() {
        assert!(is_negation("not"));
        assert!(is_negation("isn't"));
        assert!(!is_negation("note"));
    }
}
