//! # Admin Client
//!
//! Product management for admin sessions. Holding an [`AdminClient`] is the
//! proof of authorization: the only constructor checks the session role.
use super::ProductClient;
use crate::catalog::{CatalogStats, ProductQuery};
use crate::model::{AuthSession, Product, ProductCreate, ProductId, ProductUpdate, UserProfile};
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use store_actor::ActorClient;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AdminClient {
    admin: UserProfile,
    products: ProductClient,
}

impl AdminClient {
    pub fn authorize(session: &AuthSession, products: ProductClient) -> Result<Self, UserError> {
        if !session.user.is_admin() {
            warn!(user_id = %session.user.id, "Admin access denied");
            return Err(UserError::Forbidden);
        }
        Ok(Self {
            admin: session.user.clone(),
            products,
        })
    }

    pub fn admin(&self) -> &UserProfile {
        &self.admin
    }

    #[instrument(skip(self), fields(admin = %self.admin.id))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        let id = self.products.create_product(params).await?;
        info!(product_id = %id, "Product added");
        Ok(id)
    }

    #[instrument(skip(self), fields(admin = %self.admin.id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.products.update_product(id, update).await
    }

    #[instrument(skip(self), fields(admin = %self.admin.id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        let removed = self.products.delete_product(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(removed)
    }

    pub async fn set_in_stock(&self, id: ProductId, in_stock: bool) -> Result<(), ProductError> {
        self.products.set_in_stock(id, in_stock).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ProductError> {
        self.products.list().await
    }

    pub async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductError> {
        self.products.query(query).await
    }

    pub async fn stats(&self) -> Result<CatalogStats, ProductError> {
        self.products.stats().await
    }
}
