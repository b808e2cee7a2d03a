use rust_decimal::Decimal;

use crate::domain::policy;
use crate::domain::repository::ProductRepository;
use crate::domain::types::{
    Actor, AnnotatedProduct, NewProduct, ProductChanges, ProductFilter, ProductSortBy,
    validate_price,
};
use crate::error::CatalogServiceError;

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(
        &self,
        filter: ProductFilter,
        sort_by: ProductSortBy,
    ) -> Result<Vec<AnnotatedProduct>, CatalogServiceError> {
        self.repo.list_annotated(&filter, sort_by).await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<AnnotatedProduct, CatalogServiceError> {
        self.repo
            .find_annotated(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub name: String,
    pub price: Decimal,
    pub country: String,
}

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    /// The owner is always the acting user; any owner supplied by the
    /// client is ignored upstream.
    pub async fn execute(
        &self,
        actor: Actor,
        input: CreateProductInput,
    ) -> Result<AnnotatedProduct, CatalogServiceError> {
        if input.name.trim().is_empty() || input.country.trim().is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        if !validate_price(input.price) {
            return Err(CatalogServiceError::InvalidPrice);
        }
        let created = self
            .repo
            .create(
                &NewProduct {
                    name: input.name,
                    price: input.price,
                    country: input.country,
                },
                actor.id,
            )
            .await?;
        self.repo
            .find_annotated(created.id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub country: Option<String>,
}

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub async fn execute(
        &self,
        actor: Actor,
        id: i32,
        input: UpdateProductInput,
    ) -> Result<AnnotatedProduct, CatalogServiceError> {
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)?;
        if !policy::can_write(&actor, &product) {
            return Err(CatalogServiceError::Forbidden);
        }
        if input
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
            || input
                .country
                .as_deref()
                .is_some_and(|country| country.trim().is_empty())
        {
            return Err(CatalogServiceError::MissingData);
        }
        if input.price.is_some_and(|price| !validate_price(price)) {
            return Err(CatalogServiceError::InvalidPrice);
        }
        self.repo
            .update(
                id,
                &ProductChanges {
                    name: input.name,
                    price: input.price,
                    country: input.country,
                },
            )
            .await?;
        self.repo
            .find_annotated(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, actor: Actor, id: i32) -> Result<(), CatalogServiceError> {
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)?;
        if !policy::can_write(&actor, &product) {
            return Err(CatalogServiceError::Forbidden);
        }
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(CatalogServiceError::ProductNotFound);
        }
        Ok(())
    }
}
