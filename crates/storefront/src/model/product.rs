//! A catalog product.
//!
//! # Actor Framework
//! Implements [`ActorEntity`](store_actor::ActorEntity) (see
//! [`product_actor::entity`](crate::product_actor::entity)) so the catalog is
//! owned by a single [`ResourceActor`](store_actor::ResourceActor).
//!
//! The cart and the filter only ever read products.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Numeric product identifier; "newest" sorting orders by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=400";
pub const DEFAULT_RATING: f64 = 4.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// List price shown struck through when the product is discounted.
    pub original_price: Option<f64>,
    pub image: String,
    /// Category slug, e.g. `"electronics"`.
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
    pub reviews: u32,
    pub featured: bool,
}

impl Product {
    /// Percentage saved against the list price, rounded down.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || original <= self.price {
            return None;
        }
        Some(((original - self.price) / original * 100.0).floor() as u32)
    }
}

/// Payload for adding a product to the catalog.
///
/// Optional fields fall back to: placeholder image, in stock, rating
/// [`DEFAULT_RATING`], no reviews, not featured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    pub featured: Option<bool>,
}

impl Product {
    /// Builds a product from a create payload, filling in the optional fields.
    /// Performs no validation.
    pub fn from_params(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            original_price: params.original_price,
            image: params.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category: params.category,
            in_stock: params.in_stock.unwrap_or(true),
            rating: params.rating.unwrap_or(DEFAULT_RATING),
            reviews: params.reviews.unwrap_or(0),
            featured: params.featured.unwrap_or(false),
        }
    }
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            ..Self::default()
        }
    }
}

/// Admin edit. `Some` fields replace, `None` fields keep the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// `Some(None)` clears the list price, ending the discount. In JSON an
    /// explicit `null` clears and an absent key keeps.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Option<f64>>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    pub featured: Option<bool>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_json_null_clears_and_absent_keeps() {
        let clear: ProductUpdate = serde_json::from_str(r#"{"original_price": null}"#).unwrap();
        assert_eq!(clear.original_price, Some(None));

        let keep: ProductUpdate = serde_json::from_str(r#"{"price": 10.0}"#).unwrap();
        assert_eq!(keep.original_price, None);

        let set: ProductUpdate = serde_json::from_str(r#"{"original_price": 12.5}"#).unwrap();
        assert_eq!(set.original_price, Some(Some(12.5)));
    }
}
