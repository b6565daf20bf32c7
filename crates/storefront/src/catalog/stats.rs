use crate::model::Product;
use serde::Serialize;

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub featured: usize,
}

impl CatalogStats {
    pub fn from_products(products: &[Product]) -> Self {
        let in_stock = products.iter().filter(|p| p.in_stock).count();
        Self {
            total: products.len(),
            in_stock,
            out_of_stock: products.len() - in_stock,
            featured: products.iter().filter(|p| p.featured).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    #[test]
    fn test_stats_for_seed_catalog() {
        let stats = CatalogStats::from_products(&seed_products());
        assert_eq!(
            stats,
            CatalogStats {
                total: 8,
                in_stock: 7,
                out_of_stock: 1,
                featured: 3,
            }
        );
    }

    #[test]
    fn test_stats_for_empty_catalog() {
        assert_eq!(CatalogStats::from_products(&[]), CatalogStats::default());
    }
}
