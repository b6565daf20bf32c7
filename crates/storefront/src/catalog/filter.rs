use crate::model::Product;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    PriceLow,
    PriceHigh,
    Name,
    Rating,
    Newest,
    /// Catalog order.
    #[default]
    Featured,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::Featured => "featured",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a sort key. Unknown keys mean [`SortBy::Featured`].
impl FromStr for SortBy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            _ => Self::Featured,
        })
    }
}

/// The shopper's current search state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub query: String,
    pub category: String,
    /// Inclusive `(min, max)` price bounds.
    pub price_range: (f64, f64),
    pub sort_by: SortBy,
    pub in_stock_only: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_range: (0.0, 1000.0),
            sort_by: SortBy::Featured,
            in_stock_only: false,
        }
    }
}

impl ProductFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = (min, max);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    /// Back to the initial search state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && (!self.in_stock_only || product.in_stock)
    }

    fn matches_query(&self, product: &Product) -> bool {
        if self.query.is_empty() {
            return true;
        }
        matches_text(product, &self.query.to_lowercase())
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES
            || product.category.to_lowercase() == self.category.to_lowercase()
    }

    fn matches_price(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        product.price >= min && product.price <= max
    }
}

/// Case-insensitive substring match on name, description and category.
/// `needle` must already be lowercase.
pub(crate) fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Applies every predicate of `filter`, then its sort.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();
    sort_products(&mut filtered, filter.sort_by);
    filtered
}

/// Stable sort; equal keys keep their relative order.
pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Name => sort_by_name(products),
        SortBy::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        SortBy::Featured => {}
    }
}

/// Root-locale collation, so accented names sort with their base letter and
/// lowercase precedes uppercase on otherwise equal names.
fn sort_by_name(products: &mut [Product]) {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => products.sort_by(|a, b| {
            collator
                .compare(&a.name, &b.name)
                .then_with(|| a.name.cmp(&b.name))
        }),
        // Compiled collation data is built in; this only runs if it fails to load.
        Err(_) => products.sort_by(|a, b| caseless(&a.name, &b.name)),
    }
}

fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
