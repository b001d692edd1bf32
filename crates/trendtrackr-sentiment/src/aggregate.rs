//! Batch-level statistics over scored items.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::classifier::classify;
use crate::timestamp::parse_published_date;
use crate::types::{BatchSummary, DailyMean, HistogramBin, LabelCounts, ScoredItem};

/// Summarise a batch of scored items.
///
/// Every item counts toward `count`, `label_counts`, and `mean_compound`.
/// Only items with a parseable timestamp contribute to `mean_by_day`; the rest
/// are tallied in `undated` or `malformed_timestamps`. An empty batch yields
/// [`BatchSummary::no_data`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(items: &[ScoredItem]) -> BatchSummary {
    if items.is_empty() {
        return BatchSummary::no_data();
    }

    let mut label_counts = LabelCounts::default();
    let mut sum = 0.0;
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    let mut undated = 0;
    let mut malformed_timestamps = 0;

    for item in items {
        label_counts.increment(item.label);
        sum += item.compound;

        let Some(raw) = item.published_at.as_deref() else {
            undated += 1;
            continue;
        };
        match parse_published_date(raw) {
            Ok(Some(date)) => {
                let (day_sum, day_count) = by_day.entry(date).or_insert((0.0, 0));
                *day_sum += item.compound;
                *day_count += 1;
            }
            Ok(None) => undated += 1,
            Err(e) => {
                tracing::warn!(error = %e, "excluding item from daily series");
                malformed_timestamps += 1;
            }
        }
    }

    let mean_compound = sum / items.len() as f64;
    let mean_by_day = by_day
        .into_iter()
        .map(|(date, (day_sum, day_count))| DailyMean {
            date,
            mean_compound: day_sum / day_count as f64,
            count: day_count,
        })
        .collect();

    BatchSummary {
        count: items.len(),
        mean_compound: Some(mean_compound),
        overall_label: Some(classify(mean_compound)),
        label_counts,
        mean_by_day,
        undated,
        malformed_timestamps,
    }
}

/// Bucket compound scores into `bins` equal-width bins spanning `[-1.0, 1.0]`.
///
/// Bins are half-open except the last, which also holds scores of exactly 1.0.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram(items: &[ScoredItem], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }

    let width = 2.0 / bins as f64;
    let mut counts = vec![0_usize; bins];
    for item in items {
        let position = (item.compound.clamp(-1.0, 1.0) + 1.0) / width;
        let idx = (position.floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: -1.0 + i as f64 * width,
            upper: -1.0 + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn item(compound: f64, published_at: Option<&str>) -> ScoredItem {
        ScoredItem {
            text: String::new(),
            published_at: published_at.map(str::to_string),
            compound,
            label: classify(compound),
        }
    }

    #[test]
    fn empty_batch_is_no_data() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean_compound.is_none());
        assert!(summary.overall_label.is_none());
        assert!(summary.is_no_data());
        assert_eq!(summary.label_counts.total(), 0);
        assert!(summary.mean_by_day.is_empty());
    }

    #[test]
    fn label_counts_sum_to_count_and_are_zero_filled() {
        let items = vec![item(0.6, None), item(0.3, None), item(0.0, None)];
        let summary = summarize(&items);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.label_counts.total(), 3);
        assert_eq!(summary.label_counts.get(Label::Positive), 2);
        assert_eq!(summary.label_counts.get(Label::Neutral), 1);
        assert_eq!(summary.label_counts.get(Label::Negative), 0);
    }

    #[test]
    fn mean_and_overall_label() {
        let items = vec![item(0.5, None), item(-0.3, None)];
        let summary = summarize(&items);
        let mean = summary.mean_compound.unwrap();
        assert!((mean - 0.1).abs() < 1e-12, "got {mean}");
        assert_eq!(summary.overall_label, Some(Label::Positive));
    }

    #[test]
    fn undated_and_malformed_items_still_count_overall() {
        let items = vec![
            item(0.4, Some("2025-01-02T10:00:00Z")),
            item(-0.4, None),
            item(0.2, Some("")),
            item(0.8, Some("not a date")),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.undated, 2);
        assert_eq!(summary.malformed_timestamps, 1);
        assert_eq!(summary.mean_by_day.len(), 1);
        assert_eq!(summary.mean_by_day[0].count, 1);
        assert!((summary.mean_compound.unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn daily_series_sorted_ascending() {
        let items = vec![
            item(0.2, Some("2025-01-03T08:00:00Z")),
            item(0.4, Some("2025-01-01T08:00:00Z")),
            item(0.6, Some("2025-01-03T20:00:00Z")),
        ];
        let summary = summarize(&items);
        let dates: Vec<String> = summary
            .mean_by_day
            .iter()
            .map(|d| d.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-01-01", "2025-01-03"]);
        assert!((summary.mean_by_day[1].mean_compound - 0.4).abs() < 1e-12);
        assert_eq!(summary.mean_by_day[1].count, 2);
    }

    #[test]
    fn histogram_buckets_cover_range() {
        let items = vec![item(-1.0, None), item(0.0, None), item(0.04, None), item(1.0, None)];
        let bins = histogram(&items, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[10].count, 2);
        assert_eq!(bins[19].count, 1);
        assert!((bins[0].lower + 1.0).abs() < 1e-12);
        assert!((bins[19].upper - 1.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_zero_bins_is_empty() {
        assert!(histogram(&[item(0.3, None)], 0).is_empty());
    }
}
