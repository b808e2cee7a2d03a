#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    AnnotatedProduct, NewProduct, Product, ProductChanges, ProductFilter, ProductSortBy, Relation,
    RelationPatch,
};
use crate::error::CatalogServiceError;

/// Repository for products and their query-time aggregates.
pub trait ProductRepository: Send + Sync {
    /// List products with aggregates and viewers attached.
    ///
    /// Must issue a bounded number of storage reads independent of the
    /// collection size: one aggregated query plus one viewers batch.
    async fn list_annotated(
        &self,
        filter: &ProductFilter,
        sort_by: ProductSortBy,
    ) -> Result<Vec<AnnotatedProduct>, CatalogServiceError>;

    async fn find_annotated(
        &self,
        id: i32,
    ) -> Result<Option<AnnotatedProduct>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, CatalogServiceError>;

    async fn create(
        &self,
        product: &NewProduct,
        owner_id: Uuid,
    ) -> Result<Product, CatalogServiceError>;

    async fn update(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<(), CatalogServiceError>;

    /// Delete a product. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;

    /// Persist a recomputed favorite count onto the product.
    async fn set_favorite_count(
        &self,
        product_id: i32,
        count: u64,
    ) -> Result<(), CatalogServiceError>;
}

/// Repository for per-(user, product) relations.
pub trait RelationRepository: Send + Sync {
    /// Return the relation for the pair, inserting one with default values
    /// if none exists. The boolean is `true` when a row was created.
    async fn ensure(
        &self,
        user_id: Uuid,
        product_id: i32,
    ) -> Result<(Relation, bool), CatalogServiceError>;

    /// Apply a partial update to an existing relation and return it.
    async fn apply(
        &self,
        relation_id: i32,
        patch: &RelationPatch,
    ) -> Result<Relation, CatalogServiceError>;

    /// Count relations for the product with `in_favorites = true`.
    async fn count_favorites(&self, product_id: i32) -> Result<u64, CatalogServiceError>;
}
