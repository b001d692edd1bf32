//! `score` and `analyze` command handlers.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use trendtrackr_core::{preset_query, AppConfig};
use trendtrackr_sentiment::sources::{CachedSource, PayloadKind, PayloadSource};
use trendtrackr_sentiment::{
    classify, histogram, polarity_scores, run, run_source, HistogramBin, Label, PolarityScores,
    ScoredBatch, SentimentError,
};

use crate::OutputFormat;

const MAX_TEXT_WIDTH: usize = 80;

#[derive(Debug, Serialize)]
pub(crate) struct TextScore {
    pub text: String,
    pub scores: PolarityScores,
    pub label: Label,
}

impl TextScore {
    fn new(text: &str) -> Self {
        let scores = polarity_scores(text);
        let label = classify(scores.compound);
        Self {
            text: text.to_string(),
            scores,
            label,
        }
    }
}

/// Everything reported for one query.
#[derive(Debug, Serialize)]
pub(crate) struct QueryReport {
    pub query: String,
    pub source: &'static str,
    /// Product title sentiment, for Amazon payloads only.
    pub title: Option<TextScore>,
    pub batch: ScoredBatch,
    pub histogram: Vec<HistogramBin>,
}

/// Print the polarity breakdown of one text as JSON.
pub(crate) fn run_score(text: &str) -> anyhow::Result<()> {
    let score = TextScore::new(text);
    println!("{}", serde_json::to_string_pretty(&score)?);
    Ok(())
}

/// Queries to analyse: the provider preset if given, else the explicit
/// queries, else the blank "general" query.
pub(crate) fn resolve_queries(
    queries: Vec<String>,
    provider: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    if let Some(name) = provider {
        let query = preset_query(name).with_context(|| {
            let known: Vec<&str> = trendtrackr_core::PROVIDER_PRESETS
                .iter()
                .map(|p| p.name)
                .collect();
            format!("unknown provider '{name}'; expected one of: {}", known.join(", "))
        })?;
        return Ok(vec![query.to_string()]);
    }
    if queries.is_empty() {
        return Ok(vec![String::new()]);
    }
    Ok(queries)
}

/// Analyse each query through a cached payload source and print the reports.
///
/// Per-query failures are logged and skipped.
///
/// # Errors
///
/// Returns an error if every query failed or output serialisation fails.
pub(crate) fn run_analyze(
    config: &AppConfig,
    kind: PayloadKind,
    input: &Path,
    queries: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = CachedSource::with_capacity(
        PayloadSource::new(kind, input),
        config.cache_ttl(),
        config.cache_capacity,
    );

    let mut reports = Vec::with_capacity(queries.len());
    let mut failed = 0_usize;
    for query in queries {
        let outcome = match kind {
            PayloadKind::AmazonProduct => analyze_product(source.inner(), query),
            PayloadKind::News | PayloadKind::G2Vendors => {
                run_source(&source, query).map(|batch| (None, batch))
            }
        };
        match outcome {
            Ok((title, batch)) => {
                let histogram = histogram(&batch.items, config.histogram_bins);
                reports.push(QueryReport {
                    query: query.clone(),
                    source: kind.as_str(),
                    title,
                    batch,
                    histogram,
                });
            }
            Err(e) => {
                failed += 1;
                tracing::error!(query = %query, error = %e, "analysis failed");
            }
        }
    }

    if reports.is_empty() && failed > 0 {
        anyhow::bail!("all {failed} queries failed; see log for details");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                render_text(report, &mut out)?;
            }
            print!("{out}");
        }
    }
    Ok(())
}

/// Score an Amazon product's title and reviews from a single payload read.
pub(crate) fn analyze_product(
    source: &PayloadSource,
    query: &str,
) -> Result<(Option<TextScore>, ScoredBatch), SentimentError> {
    let product = source.fetch_product(query).map_err(|e| {
        tracing::warn!(query, error = %e, "product fetch failed");
        SentimentError::NoItems(e)
    })?;
    let title = (!product.title.trim().is_empty()).then(|| TextScore::new(&product.title));
    Ok((title, run(product.reviews)))
}

/// Render a plain-text report for one query.
pub(crate) fn render_text(report: &QueryReport, out: &mut String) -> std::fmt::Result {
    let query = if report.query.is_empty() {
        "(general)"
    } else {
        report.query.as_str()
    };
    writeln!(out, "Query: {query} [{}]", report.source)?;

    if let Some(title) = &report.title {
        writeln!(
            out,
            "Title: {} -> {} ({:+.4})",
            truncate(&title.text),
            title.label,
            title.scores.compound
        )?;
    }

    let summary = &report.batch.summary;
    let (Some(mean), Some(overall)) = (summary.mean_compound, summary.overall_label) else {
        writeln!(out, "No items found.")?;
        return writeln!(out);
    };

    writeln!(
        out,
        "Total: {}  Overall: {overall}  Avg. score: {mean:.2}",
        summary.count
    )?;
    let counts: Vec<String> = summary
        .label_counts
        .iter()
        .map(|(label, count)| format!("{label} {count}"))
        .collect();
    writeln!(out, "{}", counts.join(" | "))?;

    if !summary.mean_by_day.is_empty() {
        writeln!(out, "By day:")?;
        for day in &summary.mean_by_day {
            writeln!(
                out,
                "  {}  {:+.4}  ({})",
                day.date, day.mean_compound, day.count
            )?;
        }
    }
    if summary.malformed_timestamps > 0 {
        writeln!(
            out,
            "Skipped {} unparseable timestamps.",
            summary.malformed_timestamps
        )?;
    }

    writeln!(out, "Items:")?;
    for item in &report.batch.items {
        writeln!(
            out,
            "  {:<8}  {:+.4}  {}",
            item.label.as_str(),
            item.compound,
            truncate(&item.text)
        )?;
    }
    writeln!(out)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_TEXT_WIDTH - 3).collect();
    short.push_str("...");
    short
}
