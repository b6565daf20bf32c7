use super::filter::matches_text;
use crate::model::Product;

/// Quick search in catalog order. A `limit` of zero returns every match.
pub fn search(products: &[Product], query: &str, limit: usize) -> Vec<Product> {
    let needle = query.to_lowercase();
    let matches = products.iter().filter(|product| matches_text(product, &needle));
    if limit > 0 {
        matches.take(limit).cloned().collect()
    } else {
        matches.cloned().collect()
    }
}
