use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use storefront_auth_types::identity::Identity;

use crate::domain::types::{Relation, RelationPatch};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::relation::UpdateRelationUseCase;

// ── Request/response types ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRelationRequest {
    #[serde(rename = "like")]
    pub is_liked: Option<bool>,
    pub in_favorites: Option<bool>,
    #[serde(
        default,
        deserialize_with = "storefront_core::serde::double_option"
    )]
    pub rate: Option<Option<i16>>,
}

#[derive(Serialize)]
pub struct RelationResponse {
    pub product: i32,
    #[serde(rename = "like")]
    pub is_liked: bool,
    pub in_favorites: bool,
    pub rate: Option<i16>,
}

impl From<Relation> for RelationResponse {
    fn from(relation: Relation) -> Self {
        Self {
            product: relation.product_id,
            is_liked: relation.is_liked,
            in_favorites: relation.in_favorites,
            rate: relation.rate,
        }
    }
}

// ── PATCH /product_relation/{product_id} ─────────────────────────────────────

pub async fn update_relation(
    identity: Identity,
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(body): Json<UpdateRelationRequest>,
) -> Result<Json<RelationResponse>, CatalogServiceError> {
    let uc = UpdateRelationUseCase {
        relations: state.relation_repo(),
        products: state.product_repo(),
    };
    let relation = uc
        .execute(
            identity.user_id,
            product_id,
            RelationPatch {
                is_liked: body.is_liked,
                in_favorites: body.in_favorites,
                rate: body.rate,
            },
        )
        .await?;
    Ok(Json(relation.into()))
}
