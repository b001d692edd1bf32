//! NewsAPI `/v2/everything` payloads.

use serde::Deserialize;

use crate::error::FetchError;
use crate::types::TextItem;

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: Option<String>,
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    published_at: Option<String>,
}

/// Decode a NewsAPI `everything` response into headline items.
///
/// Articles without a title are skipped. Each item keeps the article's raw
/// `publishedAt` value.
///
/// # Errors
///
/// Returns [`FetchError::Upstream`] for `"status": "error"` responses and
/// [`FetchError::Schema`] when the body is not a NewsAPI response.
pub fn decode_news(json: &str) -> Result<Vec<TextItem>, FetchError> {
    let response: EverythingResponse =
        serde_json::from_str(json).map_err(|source| FetchError::Schema {
            context: "NewsAPI everything response".to_string(),
            source,
        })?;

    if response.status.as_deref() == Some("error") {
        let code = response.code.unwrap_or_else(|| "unknown".to_string());
        let message = response.message.unwrap_or_default();
        return Err(FetchError::Upstream(format!("NewsAPI {code}: {message}")));
    }

    Ok(response
        .articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title.filter(|t| !t.trim().is_empty())?;
            Some(TextItem {
                text: title,
                published_at: article.published_at,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_titles_and_timestamps_in_order() {
        let json = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {"source": {"id": null, "name": "Wire"}, "title": "Cloud outage hits users", "publishedAt": "2025-06-12T14:00:00Z"},
                {"title": null, "publishedAt": "2025-06-12T15:00:00Z"},
                {"title": "Record quarter for provider", "publishedAt": "2025-06-13T09:00:00Z"}
            ]
        }"#;
        let items = decode_news(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Cloud outage hits users");
        assert_eq!(items[0].published_at.as_deref(), Some("2025-06-12T14:00:00Z"));
        assert_eq!(items[1].text, "Record quarter for provider");
    }

    #[test]
    fn blank_titles_are_skipped() {
        let json = r#"{"status": "ok", "articles": [{"title": "   "}]}"#;
        assert!(decode_news(json).unwrap().is_empty());
    }

    #[test]
    fn error_status_is_upstream_error() {
        let json = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."}"#;
        let err = decode_news(json).unwrap_err();
        assert!(
            matches!(err, FetchError::Upstream(ref msg) if msg.contains("apiKeyInvalid")),
            "got {err:?}"
        );
    }

    #[test]
    fn non_object_is_schema_error() {
        let err = decode_news("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FetchError::Schema { .. }), "got {err:?}");
    }
}
