use std::collections::HashSet;

use crate::types::TextItem;

/// Trim item text, drop blank items, and drop exact duplicate texts.
///
/// The first occurrence of a duplicate wins, so upstream order is preserved.
#[must_use]
pub fn clean_items(items: Vec<TextItem>) -> Vec<TextItem> {
    let before = items.len();
    let mut seen: HashSet<String> = HashSet::new();
    let cleaned: Vec<TextItem> = items
        .into_iter()
        .filter_map(|mut item| {
            let trimmed = item.text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != item.text.len() {
                item.text = trimmed.to_string();
            }
            seen.insert(item.text.clone()).then_some(item)
        })
        .collect();

    if cleaned.len() != before {
        tracing::debug!(
            before,
            after = cleaned.len(),
            "dropped blank or duplicate items"
        );
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_duplicate_items() {
        let items = vec![
            TextItem::new("  Great battery  "),
            TextItem::new(""),
            TextItem::new("Great battery"),
            TextItem::new("\t"),
            TextItem::new("Poor strap"),
        ];
        let cleaned = clean_items(items);
        let texts: Vec<&str> = cleaned.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Great battery", "Poor strap"]);
    }

    #[test]
    fn keeps_timestamp_of_first_occurrence() {
        let items = vec![
            TextItem::new("Same headline").with_published_at("2025-01-01"),
            TextItem::new("Same headline").with_published_at("2025-01-02"),
        ];
        let cleaned = clean_items(items);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].published_at.as_deref(), Some("2025-01-01"));
    }
}
