//! Admin-side product listing query.
//!
//! Unlike [`ProductFilter`](super::ProductFilter), every criterion is
//! optional and nothing is sorted: matches come back in catalog order.

use super::ALL_CATEGORIES;
use crate::model::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Exact category slug. `None` or `"all"` skips the check.
    pub category: Option<String>,
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    pub featured_only: bool,
    /// `Some(false)` lists only out-of-stock products.
    pub in_stock: Option<bool>,
}

impl ProductQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(slug) => product.category == slug,
        };
        let search = match self.search.as_deref() {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        };
        category
            && search
            && (!self.featured_only || product.featured)
            && self.in_stock.map_or(true, |in_stock| product.in_stock == in_stock)
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    fn ids(query: &ProductQuery) -> Vec<u32> {
        query.apply(&seed_products()).iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let everything = vec![1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(ids(&ProductQuery::default()), everything);
        assert_eq!(ids(&ProductQuery::default().with_category("all")), everything);
    }

    #[test]
    fn test_out_of_stock_listing() {
        assert_eq!(ids(&ProductQuery::default().with_in_stock(false)), vec![5]);
        assert_eq!(ids(&ProductQuery::default().with_in_stock(true)).len(), 7);
    }

    #[test]
    fn test_criteria_combine() {
        let query = ProductQuery::default()
            .with_category("electronics")
            .featured_only();
        assert_eq!(ids(&query), vec![1]);
    }

    #[test]
    fn test_category_is_exact() {
        assert!(ids(&ProductQuery::default().with_category("Electronics")).is_empty());
    }

    #[test]
    fn test_search_ignores_category() {
        assert!(ids(&ProductQuery::default().with_search("books")).is_empty());
        assert_eq!(ids(&ProductQuery::default().with_search("PREMIUM")), vec![1, 3, 7]);
    }
}
