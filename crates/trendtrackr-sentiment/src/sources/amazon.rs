//! RapidAPI Amazon `product-details` payloads.

use serde::Deserialize;

use crate::error::FetchError;
use crate::types::TextItem;

/// Decoded product: its title plus review bodies as text items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmazonProduct {
    pub title: String,
    pub reviews: Vec<TextItem>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    message: Option<String>,
    data: Option<ProductBody>,
    #[serde(flatten)]
    body: ProductBody,
}

#[derive(Debug, Default, Deserialize)]
struct ProductBody {
    product_title: Option<String>,
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
struct Review {
    #[serde(alias = "review_comment")]
    review_text: Option<String>,
}

/// Decode a product-details response.
///
/// The product may sit at the top level or under `data`. Reviews without
/// text become empty items; [`super::clean_items`] drops them.
///
/// # Errors
///
/// Returns [`FetchError::Upstream`] when the body carries only an API
/// `message` (e.g. a subscription error) and [`FetchError::Schema`] when it
/// is not a JSON object of the expected shape.
pub fn decode_amazon_product(json: &str) -> Result<AmazonProduct, FetchError> {
    let response: ProductResponse =
        serde_json::from_str(json).map_err(|source| FetchError::Schema {
            context: "Amazon product-details response".to_string(),
            source,
        })?;

    let body = response.data.unwrap_or(response.body);
    if body.product_title.is_none() && body.reviews.is_empty() {
        if let Some(message) = response.message {
            return Err(FetchError::Upstream(format!("Amazon product API: {message}")));
        }
    }

    Ok(AmazonProduct {
        title: body.product_title.unwrap_or_default(),
        reviews: body
            .reviews
            .into_iter()
            .map(|r| TextItem::new(r.review_text.unwrap_or_default()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_top_level_product() {
        let json = r#"{
            "product_title": "Smart Watch Series 5",
            "reviews": [
                {"review_text": "Battery life is excellent"},
                {"review_text": "Strap broke in a week"},
                {}
            ]
        }"#;
        let product = decode_amazon_product(json).unwrap();
        assert_eq!(product.title, "Smart Watch Series 5");
        assert_eq!(product.reviews.len(), 3);
        assert_eq!(product.reviews[1].text, "Strap broke in a week");
        assert_eq!(product.reviews[2].text, "");
        assert!(product.reviews.iter().all(|r| r.published_at.is_none()));
    }

    #[test]
    fn decodes_product_wrapped_in_data() {
        let json = r#"{
            "status": "OK",
            "data": {
                "product_title": "Echo Dot",
                "reviews": [{"review_comment": "Sounds great"}]
            }
        }"#;
        let product = decode_amazon_product(json).unwrap();
        assert_eq!(product.title, "Echo Dot");
        assert_eq!(product.reviews[0].text, "Sounds great");
    }

    #[test]
    fn message_only_body_is_upstream_error() {
        let json = r#"{"message": "You are not subscribed to this API."}"#;
        let err = decode_amazon_product(json).unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)), "got {err:?}");
    }

    #[test]
    fn missing_product_without_message_is_empty() {
        let product = decode_amazon_product("{}").unwrap();
        assert!(product.title.is_empty());
        assert!(product.reviews.is_empty());
    }
}
