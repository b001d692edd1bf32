use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single piece of fetched text awaiting scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    /// Headline title, review body, or vendor name.
    pub text: String,
    /// Publish timestamp exactly as the upstream API returned it.
    pub published_at: Option<String>,
}

impl TextItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            published_at: None,
        }
    }

    #[must_use]
    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }
}

/// Sentiment label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`TextItem`] after scoring and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub text: String,
    pub published_at: Option<String>,
    /// Compound polarity in [-1.0, 1.0].
    pub compound: f64,
    pub label: Label,
}

/// Per-label item counts. Every label is always present, zero if unseen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    #[must_use]
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
        }
    }

    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// `(label, count)` pairs in the fixed [`Label::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.into_iter().map(|label| (label, self.get(label)))
    }
}

/// Mean compound score for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMean {
    pub date: NaiveDate,
    pub mean_compound: f64,
    /// Number of items published on `date`.
    pub count: usize,
}

/// Aggregate statistics for one scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub count: usize,
    /// Arithmetic mean of all compound scores. `None` when the batch is empty.
    pub mean_compound: Option<f64>,
    /// Label of the mean compound score. `None` when the batch is empty.
    pub overall_label: Option<Label>,
    pub label_counts: LabelCounts,
    /// Mean compound per UTC calendar date, ascending.
    pub mean_by_day: Vec<DailyMean>,
    /// Items without a publish timestamp.
    pub undated: usize,
    /// Items whose publish timestamp could not be parsed.
    pub malformed_timestamps: usize,
}

impl BatchSummary {
    /// Summary of an empty batch.
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            count: 0,
            mean_compound: None,
            overall_label: None,
            label_counts: LabelCounts::default(),
            mean_by_day: Vec::new(),
            undated: 0,
            malformed_timestamps: 0,
        }
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.count == 0
    }
}

/// Output of one pipeline run: scored items in input order plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBatch {
    pub items: Vec<ScoredItem>,
    pub summary: BatchSummary,
}

impl ScoredBatch {
    /// Items carrying `label`, in batch order.
    pub fn with_label(&self, label: Label) -> impl Iterator<Item = &ScoredItem> + '_ {
        self.items.iter().filter(move |item| item.label == label)
    }
}

/// Full polarity breakdown for one text.
///
/// `neg`, `neu`, and `pos` are proportions of the text's sentiment mass and
/// sum to roughly 1.0 when any token was scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// One bucket of a compound-score histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}
