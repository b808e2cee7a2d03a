use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_auth_types::identity::Identity;

use crate::domain::types::{Actor, AnnotatedProduct, ProductFilter, ProductSortBy};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductInput, UpdateProductUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ViewerResponse {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[serde(serialize_with = "storefront_core::serde::to_money_string")]
    pub price: Decimal,
    pub country: String,
    pub owner: Option<Uuid>,
    pub favorite_count: Option<i32>,
    pub annotated_likes: i64,
    #[serde(serialize_with = "storefront_core::serde::to_money_string_opt")]
    pub rating: Option<Decimal>,
    pub owner_name: String,
    pub viewers: Vec<ViewerResponse>,
}

impl From<AnnotatedProduct> for ProductResponse {
    fn from(product: AnnotatedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            country: product.country,
            owner: product.owner_id,
            favorite_count: product.favorite_count,
            annotated_likes: product.annotated_likes,
            rating: product.rating,
            owner_name: product.owner_name,
            viewers: product
                .viewers
                .into_iter()
                .map(|viewer| ViewerResponse {
                    first_name: viewer.first_name,
                    last_name: viewer.last_name,
                })
                .collect(),
        }
    }
}

fn actor_from(identity: Identity) -> Actor {
    Actor {
        id: identity.user_id,
        is_staff: identity.is_staff,
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ProductListQuery {
    pub price: Option<Decimal>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// ── GET /products ────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ProductResponse>>, CatalogServiceError> {
    let query: ProductListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::MissingData)?
        .unwrap_or_default();

    // Unknown ordering values fall back to the default, id ascending.
    let sort_by = query
        .ordering
        .as_deref()
        .and_then(ProductSortBy::from_param)
        .unwrap_or_default();

    let uc = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = uc
        .execute(
            ProductFilter {
                price: query.price,
                search: query.search,
            },
            sort_by,
        )
        .await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// ── GET /products/{id} ───────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    let uc = GetProductUseCase {
        repo: state.product_repo(),
    };
    let product = uc.execute(id).await?;
    Ok(Json(product.into()))
}

// ── POST /products ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub country: String,
    // Any `owner` key in the body is ignored: the owner is always the
    // acting user.
}

pub async fn create_product(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), CatalogServiceError> {
    let uc = CreateProductUseCase {
        repo: state.product_repo(),
    };
    let product = uc
        .execute(
            actor_from(identity),
            CreateProductInput {
                name: body.name,
                price: body.price,
                country: body.country,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── PUT/PATCH /products/{id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub country: Option<String>,
}

pub async fn update_product(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    let uc = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    let product = uc
        .execute(
            actor_from(identity),
            id,
            UpdateProductInput {
                name: body.name,
                price: body.price,
                country: body.country,
            },
        )
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /products/{id} ────────────────────────────────────────────────────

pub async fn delete_product(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    let uc = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    uc.execute(actor_from(identity), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
