//! # Catalog
//!
//! Read-side helpers over product lists: the shopper's filter/sort
//! composition, quick search, dashboard counters and the mock data the store
//! starts with. All pure; the product actor owns the data itself.

pub mod filter;
pub mod query;
pub mod search;
pub mod seed;
pub mod stats;

pub use filter::{filter_products, sort_products, ProductFilter, SortBy, ALL_CATEGORIES};
pub use query::ProductQuery;
pub use search::search;
pub use stats::CatalogStats;
