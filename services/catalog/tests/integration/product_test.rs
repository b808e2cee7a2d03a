use rust_decimal::Decimal;
use uuid::Uuid;

use storefront_catalog::domain::types::{ProductFilter, ProductSortBy, Sort};
use storefront_catalog::error::CatalogServiceError;
use storefront_catalog::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductInput, UpdateProductUseCase,
};

use crate::helpers::{MockCatalog, actor};

fn seed_three_products(catalog: &MockCatalog, owner: Uuid) {
    catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", Some(owner));
    catalog.seed_product("Test product 2", Decimal::new(35, 0), "Country 3", Some(owner));
    catalog.seed_product(
        "Test product 3 Country 1",
        Decimal::new(35, 0),
        "Country 2",
        Some(owner),
    );
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_force_owner_to_acting_user_on_create() {
    let catalog = MockCatalog::new();
    let user = Uuid::new_v4();
    let uc = CreateProductUseCase {
        repo: catalog.clone(),
    };

    let created = uc
        .execute(
            actor(user, false),
            CreateProductInput {
                name: "Cheese".to_owned(),
                price: Decimal::new(52, 0),
                country: "Italy".to_owned(),
            },
        )
        .await
        .unwrap();

    assert_eq!(catalog.product(created.id).unwrap().owner_id, Some(user));
    assert_eq!(catalog.product_count(), 1);
}

#[tokio::test]
async fn should_reject_create_with_empty_name() {
    let catalog = MockCatalog::new();
    let uc = CreateProductUseCase {
        repo: catalog.clone(),
    };

    let result = uc
        .execute(
            actor(Uuid::new_v4(), false),
            CreateProductInput {
                name: "  ".to_owned(),
                price: Decimal::new(52, 0),
                country: "Italy".to_owned(),
            },
        )
        .await;

    assert!(matches!(result, Err(CatalogServiceError::MissingData)));
    assert_eq!(catalog.product_count(), 0);
}

#[tokio::test]
async fn should_reject_create_with_invalid_price() {
    let catalog = MockCatalog::new();
    let uc = CreateProductUseCase {
        repo: catalog.clone(),
    };

    let result = uc
        .execute(
            actor(Uuid::new_v4(), false),
            CreateProductInput {
                name: "Cheese".to_owned(),
                price: Decimal::new(52005, 3), // 52.005
                country: "Italy".to_owned(),
            },
        )
        .await;

    assert!(matches!(result, Err(CatalogServiceError::InvalidPrice)));
    assert_eq!(catalog.product_count(), 0);
}

// ── Retrieve ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_not_found_for_missing_product() {
    let catalog = MockCatalog::new();
    let uc = GetProductUseCase { repo: catalog };

    let result = uc.execute(999).await;
    assert!(matches!(result, Err(CatalogServiceError::ProductNotFound)));
}

#[tokio::test]
async fn should_return_null_rating_when_nothing_rated() {
    let catalog = MockCatalog::new();
    let user = Uuid::new_v4();
    let product = catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", None);
    catalog.seed_relation(user, product.id, true, false, None);

    let uc = GetProductUseCase {
        repo: catalog.clone(),
    };
    let annotated = uc.execute(product.id).await.unwrap();

    assert_eq!(annotated.rating, None);
    assert_eq!(annotated.annotated_likes, 1);
}

#[tokio::test]
async fn should_average_rates_over_rated_relations() {
    let catalog = MockCatalog::new();
    let product = catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", None);
    catalog.seed_relation(Uuid::new_v4(), product.id, true, false, Some(5));
    catalog.seed_relation(Uuid::new_v4(), product.id, true, false, Some(4));

    let uc = GetProductUseCase {
        repo: catalog.clone(),
    };
    let annotated = uc.execute(product.id).await.unwrap();

    assert_eq!(annotated.rating, Some(Decimal::new(45, 1))); // 4.5
    assert_eq!(annotated.annotated_likes, 2);
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn owner_can_update_product() {
    let catalog = MockCatalog::new();
    let owner = Uuid::new_v4();
    let product = catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", Some(owner));

    let uc = UpdateProductUseCase {
        repo: catalog.clone(),
    };
    let updated = uc
        .execute(
            actor(owner, false),
            product.id,
            UpdateProductInput {
                name: None,
                price: Some(Decimal::new(40, 0)),
                country: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, Decimal::new(40, 0));
    assert_eq!(catalog.product(product.id).unwrap().price, Decimal::new(40, 0));
}

#[tokio::test]
async fn non_owner_update_is_forbidden_and_product_unchanged() {
    let catalog = MockCatalog::new();
    let owner = Uuid::new_v4();
    let product = catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", Some(owner));

    let uc = UpdateProductUseCase {
        repo: catalog.clone(),
    };
    let result = uc
        .execute(
            actor(Uuid::new_v4(), false),
            product.id,
            UpdateProductInput {
                name: None,
                price: Some(Decimal::new(40, 0)),
                country: None,
            },
        )
        .await;

    assert!(matches!(result, Err(CatalogServiceError::Forbidden)));
    assert_eq!(catalog.product(product.id).unwrap().price, Decimal::new(25, 0));
}

#[tokio::test]
async fn staff_can_update_any_product() {
    let catalog = MockCatalog::new();
    let product = catalog.seed_product(
        "Test product 1",
        Decimal::new(25, 0),
        "Country 1",
        Some(Uuid::new_v4()),
    );

    let uc = UpdateProductUseCase {
        repo: catalog.clone(),
    };
    let updated = uc
        .execute(
            actor(Uuid::new_v4(), true),
            product.id,
            UpdateProductInput {
                name: None,
                price: Some(Decimal::new(40, 0)),
                country: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, Decimal::new(40, 0));
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let catalog = MockCatalog::new();
    let uc = UpdateProductUseCase { repo: catalog };

    let result = uc
        .execute(
            actor(Uuid::new_v4(), true),
            999,
            UpdateProductInput {
                name: None,
                price: None,
                country: None,
            },
        )
        .await;

    assert!(matches!(result, Err(CatalogServiceError::ProductNotFound)));
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn owner_can_delete_product_and_relations_cascade() {
    let catalog = MockCatalog::new();
    let owner = Uuid::new_v4();
    let product = catalog.seed_product("Test product 1", Decimal::new(25, 0), "Country 1", Some(owner));
    catalog.seed_relation(owner, product.id, true, true, Some(5));

    let uc = DeleteProductUseCase {
        repo: catalog.clone(),
    };
    uc.execute(actor(owner, false), product.id).await.unwrap();

    assert_eq!(catalog.product_count(), 0);
    assert!(catalog.relation_for(owner, product.id).is_none());
}

#[tokio::test]
async fn non_owner_delete_is_forbidden() {
    let catalog = MockCatalog::new();
    let product = catalog.seed_product(
        "Test product 1",
        Decimal::new(25, 0),
        "Country 1",
        Some(Uuid::new_v4()),
    );

    let uc = DeleteProductUseCase {
        repo: catalog.clone(),
    };
    let result = uc.execute(actor(Uuid::new_v4(), false), product.id).await;

    assert!(matches!(result, Err(CatalogServiceError::Forbidden)));
    assert_eq!(catalog.product_count(), 1);
}

// ── List ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_by_exact_price() {
    let catalog = MockCatalog::new();
    seed_three_products(&catalog, Uuid::new_v4());

    let uc = ListProductsUseCase {
        repo: catalog.clone(),
    };
    let products = uc
        .execute(
            ProductFilter {
                price: Some(Decimal::new(35, 0)),
                search: None,
            },
            ProductSortBy::Id,
        )
        .await
        .unwrap();

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn should_search_name_and_country_case_insensitively() {
    let catalog = MockCatalog::new();
    seed_three_products(&catalog, Uuid::new_v4());

    let uc = ListProductsUseCase {
        repo: catalog.clone(),
    };
    let products = uc
        .execute(
            ProductFilter {
                price: None,
                search: Some("country 1".to_owned()),
            },
            ProductSortBy::Id,
        )
        .await
        .unwrap();

    // Product 1 matches on country, product 3 matches on name.
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn should_order_by_price_descending() {
    let catalog = MockCatalog::new();
    seed_three_products(&catalog, Uuid::new_v4());

    let uc = ListProductsUseCase {
        repo: catalog.clone(),
    };
    let products = uc
        .execute(
            ProductFilter::default(),
            ProductSortBy::Price(Sort::Desc),
        )
        .await
        .unwrap();

    let prices: Vec<Decimal> = products.iter().map(|p| p.price).collect();
    assert_eq!(
        prices,
        vec![Decimal::new(35, 0), Decimal::new(35, 0), Decimal::new(25, 0)]
    );
}

#[tokio::test]
async fn should_default_to_id_ordering() {
    let catalog = MockCatalog::new();
    seed_three_products(&catalog, Uuid::new_v4());

    let uc = ListProductsUseCase {
        repo: catalog.clone(),
    };
    let products = uc
        .execute(ProductFilter::default(), ProductSortBy::default())
        .await
        .unwrap();

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
