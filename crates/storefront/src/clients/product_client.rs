//! # Product Client
//!
//! Typed API over the Product actor: admin mutations, stock actions and the
//! shopper-facing catalog reads (browse, search, featured, categories).
use crate::catalog::{self, seed::seed_categories, CatalogStats, ProductFilter, ProductQuery};
use crate::model::{Category, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use std::sync::Arc;
use store_actor::{ActorClient, ActorError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    categories: Arc<Vec<Category>>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: ActorError) -> Self::Error {
        match e {
            ActorError::NotFound { id, .. } => ProductError::NotFound(id),
            other => other
                .into_entity::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunication(e.to_string())),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunication(format!("unexpected action result: {result:?}"))
}

impl ProductClient {
    /// Client with the default category list.
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self::with_categories(inner, seed_categories())
    }

    pub fn with_categories(inner: ResourceClient<Product>, categories: Vec<Category>) -> Self {
        Self {
            inner,
            categories: Arc::new(categories),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Removes the product and returns it.
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(in_stock) => Ok(in_stock),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_in_stock(&self, id: ProductId, in_stock: bool) -> Result<(), ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetInStock(in_stock))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::SetInStock(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_featured(&self, id: ProductId, featured: bool) -> Result<(), ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetFeatured(featured))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::SetFeatured(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// The catalog as the shopper's filter shows it.
    #[instrument(skip(self))]
    pub async fn browse(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(catalog::filter_products(&products, filter))
    }

    /// Quick search. `limit == 0` means no limit.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>, ProductError> {
        if query.trim().is_empty() {
            return Err(ProductError::Validation("Search query is required".into()));
        }
        let products = self.list().await?;
        Ok(catalog::search(&products, query, limit))
    }

    pub async fn featured(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(|p| p.featured).collect())
    }

    /// Exact slug match; `"all"` returns everything.
    pub async fn by_category(&self, slug: &str) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        if slug == catalog::ALL_CATEGORIES {
            return Ok(products);
        }
        Ok(products.into_iter().filter(|p| p.category == slug).collect())
    }

    /// Unsorted listing narrowed by any combination of criteria.
    #[instrument(skip(self))]
    pub async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(query.apply(&products))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.as_ref().clone()
    }

    pub async fn stats(&self) -> Result<CatalogStats, ProductError> {
        let products = self.list().await?;
        Ok(CatalogStats::from_products(&products))
    }
}
