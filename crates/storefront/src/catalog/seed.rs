//! The mock catalog the store opens with.
//!
//! Products are listed in catalog order. Seeding them into a fresh product
//! actor allocates ids 1 through 8, matching [`seed_products`].

use crate::model::{Category, Product, ProductCreate, ProductId};

pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Electronics", "electronics", "/modern-electronics.png"),
        Category::new(2, "Fashion", "fashion", "/stylish-fashion-clothing.jpg"),
        Category::new(3, "Home & Garden", "home-garden", "/home-decor-and-garden-items.jpg"),
        Category::new(4, "Sports", "sports", "/sports-equipment-and-gear.jpg"),
        Category::new(5, "Books", "books", "/collection-of-books.jpg"),
        Category::new(6, "Beauty", "beauty", "/categories/beauty.png"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    name: &str,
    price: f64,
    original_price: Option<f64>,
    description: &str,
    image: &str,
    category: &str,
    in_stock: bool,
    rating: f64,
    reviews: u32,
    featured: bool,
) -> ProductCreate {
    ProductCreate {
        original_price,
        image: Some(image.to_string()),
        in_stock: Some(in_stock),
        rating: Some(rating),
        reviews: Some(reviews),
        featured: Some(featured),
        ..ProductCreate::new(name, description, price, category)
    }
}

/// Create payloads for the mock catalog.
pub fn seed_product_params() -> Vec<ProductCreate> {
    vec![
        listing(
            "Premium Wireless Headphones",
            299.99,
            Some(399.99),
            "High-quality wireless headphones with noise cancellation and premium sound quality.",
            "/premium-wireless-headphones.png",
            "electronics",
            true,
            4.8,
            124,
            true,
        ),
        listing(
            "Smart Fitness Watch",
            199.99,
            None,
            "Advanced fitness tracking with heart rate monitoring and GPS.",
            "/smart-fitness-watch.png",
            "electronics",
            true,
            4.6,
            89,
            false,
        ),
        listing(
            "Designer Leather Jacket",
            449.99,
            Some(599.99),
            "Premium leather jacket with modern design and superior craftsmanship.",
            "/designer-leather-jacket.jpg",
            "fashion",
            true,
            4.9,
            67,
            true,
        ),
        listing(
            "Ergonomic Office Chair",
            349.99,
            None,
            "Comfortable office chair with lumbar support and adjustable height.",
            "/ergonomic-office-chair.png",
            "home-garden",
            true,
            4.7,
            156,
            false,
        ),
        listing(
            "Professional Tennis Racket",
            179.99,
            None,
            "High-performance tennis racket used by professionals.",
            "/professional-tennis-racket.jpg",
            "sports",
            false,
            4.5,
            43,
            false,
        ),
        listing(
            "Bestselling Novel Collection",
            29.99,
            Some(49.99),
            "Collection of three bestselling novels from award-winning authors.",
            "/bestselling-novel-collection.jpg",
            "books",
            true,
            4.4,
            234,
            true,
        ),
        listing(
            "Luxury Skincare Set",
            89.99,
            None,
            "Complete skincare routine with premium organic ingredients.",
            "/luxury-skincare-set.png",
            "beauty",
            true,
            4.8,
            91,
            false,
        ),
        listing(
            "4K Ultra HD Monitor",
            599.99,
            None,
            "32-inch 4K monitor perfect for gaming and professional work.",
            "/4k-ultra-hd-monitor.jpg",
            "electronics",
            true,
            4.7,
            78,
            false,
        ),
    ]
}

/// The mock catalog as products, with the ids an actor would allocate.
pub fn seed_products() -> Vec<Product> {
    seed_product_params()
        .into_iter()
        .zip(1u32..)
        .map(|(params, id)| Product::from_params(ProductId(id), params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_are_well_formed() {
        let products = seed_products();
        assert_eq!(products.len(), 8);

        let categories = seed_categories();
        for product in &products {
            assert!(categories.iter().any(|c| c.slug == product.category));
            assert!(product.price >= 0.0);
        }

        let featured: Vec<u32> = products.iter().filter(|p| p.featured).map(|p| p.id.0).collect();
        assert_eq!(featured, vec![1, 3, 6]);
        assert!(!products[4].in_stock);
    }

    #[test]
    fn test_discounts() {
        let products = seed_products();
        assert_eq!(products[0].discount_percent(), Some(25));
        assert_eq!(products[1].discount_percent(), None);
    }
}
