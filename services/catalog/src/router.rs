use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use storefront_core::health::{healthz, readyz};
use storefront_core::middleware::request_id_layer;

use crate::handlers::{
    product::{create_product, delete_product, get_product, list_products, update_product},
    relation::update_relation,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Products
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", patch(update_product))
        .route("/products/{id}", delete(delete_product))
        // Relations
        .route("/product_relation/{product_id}", patch(update_relation))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
