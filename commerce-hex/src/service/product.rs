//! Product catalogue operations.

use commerce_types::{AppError, Product, ProductId, ProductRepository, ProductRequest};

use super::parse_id;

/// Application service for products.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new product.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, req: ProductRequest) -> Result<Product, AppError> {
        let product = Product::new(req.name, req.price)?;
        self.repo.insert_product(&product).await?;

        tracing::debug!(product_id = %product.id, "product created");
        Ok(product)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        let id: ProductId = parse_id(id, "product ID")?;

        self.repo
            .get_product(id)
            .await?
            .ok_or_else(|| AppError::NotFound("product".into()))
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list_products().await.map_err(Into::into)
    }

    /// Replaces name and price. Both must satisfy the creation rules.
    #[tracing::instrument(skip(self))]
    pub async fn update_product(&self, id: &str, req: ProductRequest) -> Result<(), AppError> {
        let id: ProductId = parse_id(id, "product ID")?;
        Product::validate(&req.name, req.price)?;

        if !self.repo.update_product(id, &req.name, req.price).await? {
            return Err(AppError::NotFound("product".into()));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        let id: ProductId = parse_id(id, "product ID")?;

        if !self.repo.delete_product(id).await? {
            return Err(AppError::NotFound("product".into()));
        }
        Ok(())
    }
}
