use uuid::Uuid;

use crate::domain::repository::{ProductRepository, RelationRepository};
use crate::domain::types::{Relation, RelationPatch};
use crate::error::CatalogServiceError;
use crate::usecase::favorites::recompute_favorite_count;

// ── UpdateRelation ───────────────────────────────────────────────────────────

/// Ensure-then-apply write to the caller's relation with a product.
///
/// The relation is created with defaults on first touch, then the patch is
/// applied. The favorite recount runs afterwards when the row is new or
/// `in_favorites` changed value; like/rate-only changes do not trigger it.
pub struct UpdateRelationUseCase<R: RelationRepository, P: ProductRepository> {
    pub relations: R,
    pub products: P,
}

impl<R: RelationRepository, P: ProductRepository> UpdateRelationUseCase<R, P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        product_id: i32,
        patch: RelationPatch,
    ) -> Result<Relation, CatalogServiceError> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(CatalogServiceError::ProductNotFound);
        }
        if !patch.is_valid() {
            return Err(CatalogServiceError::InvalidRate);
        }

        let (relation, created) = self.relations.ensure(user_id, product_id).await?;
        let was_favorite = relation.in_favorites;
        let updated = self.relations.apply(relation.id, &patch).await?;

        if created || updated.in_favorites != was_favorite {
            recompute_favorite_count(&self.relations, &self.products, product_id).await?;
        }
        Ok(updated)
    }
}
