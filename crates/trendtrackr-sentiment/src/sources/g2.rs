//! RapidAPI G2 `vendor/autocomplete` payloads.

use serde::Deserialize;

use crate::error::FetchError;
use crate::types::TextItem;

const UNKNOWN_VENDOR: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    message: Option<String>,
    vendors: Option<Vec<Vendor>>,
}

#[derive(Debug, Deserialize)]
struct Vendor {
    #[serde(rename = "Name")]
    name: Option<String>,
}

/// Decode a vendor autocomplete response into one item per vendor name.
///
/// # Errors
///
/// Returns [`FetchError::Upstream`] when the body has no `vendors` but an API
/// `message`, and [`FetchError::Schema`] on malformed JSON.
pub fn decode_g2_vendors(json: &str) -> Result<Vec<TextItem>, FetchError> {
    let response: AutocompleteResponse =
        serde_json::from_str(json).map_err(|source| FetchError::Schema {
            context: "G2 vendor autocomplete response".to_string(),
            source,
        })?;

    match (response.vendors, response.message) {
        (Some(vendors), _) => Ok(vendors
            .into_iter()
            .map(|v| TextItem::new(v.name.unwrap_or_else(|| UNKNOWN_VENDOR.to_string())))
            .collect()),
        (None, Some(message)) => Err(FetchError::Upstream(format!("G2 API: {message}"))),
        (None, None) => Ok(Vec::new()),
    }
}
