//! Sentiment pipeline orchestration.

use crate::aggregate::summarize;
use crate::classifier::classify;
use crate::error::SentimentError;
use crate::scorer::SentimentAnalyzer;
use crate::sources::TextSource;
use crate::types::{ScoredBatch, ScoredItem, TextItem};

/// Score, classify, and summarise one batch with the shared lexicon.
///
/// Output items keep input order. An empty batch is not an error: it yields
/// a summary with `count == 0` and no mean.
#[must_use]
pub fn run(items: Vec<TextItem>) -> ScoredBatch {
    run_with(&SentimentAnalyzer::default(), items)
}

/// Like [`run`], with an explicit analyzer.
#[must_use]
pub fn run_with(analyzer: &SentimentAnalyzer<'_>, items: Vec<TextItem>) -> ScoredBatch {
    let scored: Vec<ScoredItem> = items
        .into_iter()
        .map(|item| score_item(analyzer, item))
        .collect();
    let summary = summarize(&scored);

    if summary.is_no_data() {
        tracing::info!("empty batch, nothing to score");
    } else {
        tracing::info!(
            count = summary.count,
            mean = summary.mean_compound.unwrap_or_default(),
            positive = summary.label_counts.positive,
            negative = summary.label_counts.negative,
            neutral = summary.label_counts.neutral,
            "scored batch"
        );
    }

    ScoredBatch {
        items: scored,
        summary,
    }
}

/// Fetch a batch for `query` from `source` and run it through the pipeline.
///
/// # Errors
///
/// Returns [`SentimentError::NoItems`] when the fetch fails. A fetch that
/// succeeds with zero items is not an error.
pub fn run_source<S>(source: &S, query: &str) -> Result<ScoredBatch, SentimentError>
where
    S: TextSource + ?Sized,
{
    let items = source.fetch(query).map_err(|e| {
        tracing::warn!(source = source.name(), query, error = %e, "fetch failed");
        SentimentError::NoItems(e)
    })?;
    tracing::debug!(
        source = source.name(),
        query,
        count = items.len(),
        "fetched items"
    );
    Ok(run(items))
}

fn score_item(analyzer: &SentimentAnalyzer<'_>, item: TextItem) -> ScoredItem {
    let compound = analyzer.score(&item.text);
    ScoredItem {
        text: item.text,
        published_at: item.published_at,
        compound,
        label: classify(compound),
    }
}
