//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use store_actor::ActorEntity;

/// Checks the fields a product must always satisfy.
pub fn validate(product: &Product) -> Result<(), ProductError> {
    for (field, value) in [
        ("name", &product.name),
        ("description", &product.description),
        ("category", &product.category),
    ] {
        if value.trim().is_empty() {
            return Err(ProductError::Validation(format!(
                "Missing required field: {field}"
            )));
        }
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ProductError::Validation(format!(
            "Invalid price: {}",
            product.price
        )));
    }
    if let Some(original) = product.original_price {
        if !original.is_finite() || original < 0.0 {
            return Err(ProductError::Validation(format!(
                "Invalid original price: {original}"
            )));
        }
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(ProductError::Validation(format!(
            "Rating must be between 0 and 5, got {}",
            product.rating
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    const KIND: &'static str = "Product";

    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let product = Product::from_params(id, params);
        validate(&product)?;
        Ok(product)
    }

    /// Applies every `Some` field, then re-validates. Invalid edits are
    /// discarded whole.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name;
        }
        if let Some(description) = update.description {
            next.description = description;
        }
        if let Some(price) = update.price {
            next.price = price;
        }
        if let Some(original_price) = update.original_price {
            next.original_price = original_price;
        }
        if let Some(image) = update.image {
            next.image = image;
        }
        if let Some(category) = update.category {
            next.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            next.in_stock = in_stock;
        }
        if let Some(rating) = update.rating {
            next.rating = rating;
        }
        if let Some(reviews) = update.reviews {
            next.reviews = reviews;
        }
        if let Some(featured) = update.featured {
            next.featured = featured;
        }
        validate(&next)?;
        *self = next;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.in_stock)),
            ProductAction::SetInStock(in_stock) => {
                self.in_stock = in_stock;
                Ok(ProductActionResult::SetInStock(()))
            }
            ProductAction::SetFeatured(featured) => {
                self.featured = featured;
                Ok(ProductActionResult::SetFeatured(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ProductCreate {
        ProductCreate::new("Desk Lamp", "Warm LED lamp", 39.5, "home-garden")
    }

    #[test]
    fn test_create_fills_defaults() {
        let product = Product::from_create_params(ProductId(9), params()).unwrap();
        assert_eq!(product.id, ProductId(9));
        assert!(product.in_stock);
        assert_eq!(product.rating, crate::model::DEFAULT_RATING);
        assert_eq!(product.reviews, 0);
        assert!(!product.featured);
        assert_eq!(product.image, crate::model::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        let mut p = params();
        p.category = "  ".into();
        assert_eq!(
            Product::from_create_params(ProductId(1), p).unwrap_err(),
            ProductError::Validation("Missing required field: category".into())
        );
    }

    #[test]
    fn test_create_rejects_bad_numbers() {
        let mut p = params();
        p.price = -1.0;
        assert!(Product::from_create_params(ProductId(1), p).is_err());

        let mut p = params();
        p.price = f64::NAN;
        assert!(Product::from_create_params(ProductId(1), p).is_err());

        let mut p = params();
        p.original_price = Some(f64::INFINITY);
        assert!(Product::from_create_params(ProductId(1), p).is_err());

        let mut p = params();
        p.rating = Some(5.5);
        assert!(Product::from_create_params(ProductId(1), p).is_err());
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_product_unchanged() {
        let mut product = Product::from_create_params(ProductId(1), params()).unwrap();
        let before = product.clone();

        let update = ProductUpdate {
            name: Some("Floor Lamp".into()),
            price: Some(-3.0),
            ..Default::default()
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product, before);

        let update = ProductUpdate {
            name: Some("Floor Lamp".into()),
            featured: Some(true),
            ..Default::default()
        };
        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.name, "Floor Lamp");
        assert!(product.featured);
        assert_eq!(product.price, 39.5);
    }

    #[tokio::test]
    async fn test_update_sets_then_clears_list_price() {
        let mut product = Product::from_create_params(ProductId(1), params()).unwrap();

        let discount = ProductUpdate {
            original_price: Some(Some(79.0)),
            ..Default::default()
        };
        product.on_update(discount, &()).await.unwrap();
        assert_eq!(product.discount_percent(), Some(50));

        let untouched = ProductUpdate {
            price: Some(39.5),
            ..Default::default()
        };
        product.on_update(untouched, &()).await.unwrap();
        assert_eq!(product.original_price, Some(79.0));

        let clear = ProductUpdate {
            original_price: Some(None),
            ..Default::default()
        };
        product.on_update(clear, &()).await.unwrap();
        assert_eq!(product.original_price, None);
        assert_eq!(product.discount_percent(), None);
    }

    #[tokio::test]
    async fn test_stock_actions() {
        let mut product = Product::from_create_params(ProductId(1), params()).unwrap();

        let result = product.handle_action(ProductAction::SetInStock(false), &()).await;
        assert_eq!(result, Ok(ProductActionResult::SetInStock(())));
        assert_eq!(
            product.handle_action(ProductAction::CheckStock, &()).await,
            Ok(ProductActionResult::CheckStock(false))
        );
    }
}
