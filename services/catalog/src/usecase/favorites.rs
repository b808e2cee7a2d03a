use crate::domain::repository::{ProductRepository, RelationRepository};
use crate::error::CatalogServiceError;

/// Recount the product's favorited relations and persist the result onto
/// the product record.
///
/// Always a full recount, never an increment: concurrent writers may race,
/// but the last recount to commit leaves the stored value consistent with
/// storage. Runs inline with the triggering write; a persistence failure
/// propagates to the caller.
pub async fn recompute_favorite_count<R, P>(
    relations: &R,
    products: &P,
    product_id: i32,
) -> Result<u64, CatalogServiceError>
where
    R: RelationRepository,
    P: ProductRepository,
{
    let count = relations.count_favorites(product_id).await?;
    products.set_favorite_count(product_id, count).await?;
    Ok(count)
}

// ── RecomputeFavoriteCount ───────────────────────────────────────────────────

pub struct RecomputeFavoriteCountUseCase<R: RelationRepository, P: ProductRepository> {
    pub relations: R,
    pub products: P,
}

impl<R: RelationRepository, P: ProductRepository> RecomputeFavoriteCountUseCase<R, P> {
    pub async fn execute(&self, product_id: i32) -> Result<u64, CatalogServiceError> {
        recompute_favorite_count(&self.relations, &self.products, product_id).await
    }
}
