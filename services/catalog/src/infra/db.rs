use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, Statement,
};
use uuid::Uuid;

use storefront_catalog_schema::{products, user_relations, users};

use crate::domain::repository::{ProductRepository, RelationRepository};
use crate::domain::types::{
    AnnotatedProduct, NewProduct, Product, ProductChanges, ProductFilter, ProductSortBy, Relation,
    RelationPatch, Sort, ViewerName,
};
use crate::error::CatalogServiceError;

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

/// One row of the aggregated product query.
#[derive(Debug, FromQueryResult)]
struct AnnotatedRow {
    id: i32,
    name: String,
    price: rust_decimal::Decimal,
    country: String,
    owner_id: Option<Uuid>,
    favorite_count: Option<i32>,
    owner_name: String,
    annotated_likes: i64,
    rating: Option<rust_decimal::Decimal>,
}

/// WHERE fragment (starting with " AND ...") and its bind values for the
/// aggregated query.
fn filter_clause(filter: &ProductFilter) -> (String, Vec<sea_orm::Value>) {
    let mut clause = String::new();
    let mut values: Vec<sea_orm::Value> = Vec::new();
    if let Some(price) = filter.price {
        values.push(price.into());
        clause.push_str(&format!(" AND p.price = ${}", values.len()));
    }
    if let Some(search) = &filter.search {
        values.push(format!("%{search}%").into());
        let n = values.len();
        clause.push_str(&format!(" AND (p.name ILIKE ${n} OR p.country ILIKE ${n})"));
    }
    (clause, values)
}

fn order_clause(sort_by: ProductSortBy) -> &'static str {
    match sort_by {
        ProductSortBy::Id => "p.id ASC",
        ProductSortBy::Price(Sort::Asc) => "p.price ASC",
        ProductSortBy::Price(Sort::Desc) => "p.price DESC",
        ProductSortBy::Country(Sort::Asc) => "p.country ASC",
        ProductSortBy::Country(Sort::Desc) => "p.country DESC",
    }
}

impl DbProductRepository {
    /// Run the aggregated product query.
    ///
    /// Like count and mean rating are computed in SQL with the owner joined
    /// in, so the list costs one read regardless of collection size.
    async fn query_annotated(
        &self,
        where_clause: &str,
        values: Vec<sea_orm::Value>,
        sort_by: ProductSortBy,
    ) -> Result<Vec<AnnotatedRow>, CatalogServiceError> {
        let sql = format!(
            r#"
            SELECT p.id, p.name, p.price, p.country, p.owner_id, p.favorite_count,
                   COALESCE(u.username, '') AS owner_name,
                   COUNT(CASE WHEN r.is_liked THEN 1 END) AS annotated_likes,
                   AVG(r.rate) AS rating
            FROM products p
            LEFT JOIN users u ON u.id = p.owner_id
            LEFT JOIN user_relations r ON r.product_id = p.id
            WHERE TRUE{where_clause}
            GROUP BY p.id, u.username
            ORDER BY {order}
            "#,
            order = order_clause(sort_by),
        );

        AnnotatedRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            &sql,
            values,
        ))
        .all(&self.db)
        .await
        .context("query annotated products")
        .map_err(Into::into)
    }

    /// Fetch viewer names for all listed products in one batch read.
    async fn attach_viewers(
        &self,
        rows: Vec<AnnotatedRow>,
    ) -> Result<Vec<AnnotatedProduct>, CatalogServiceError> {
        let mut viewers_by_product: HashMap<i32, Vec<ViewerName>> = HashMap::new();
        if !rows.is_empty() {
            let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
            let viewer_rows = user_relations::Entity::find()
                .filter(user_relations::Column::ProductId.is_in(ids))
                .find_also_related(users::Entity)
                .order_by_asc(user_relations::Column::Id)
                .all(&self.db)
                .await
                .context("fetch product viewers")?;
            for (relation, user) in viewer_rows {
                if let Some(user) = user {
                    viewers_by_product
                        .entry(relation.product_id)
                        .or_default()
                        .push(ViewerName {
                            first_name: user.first_name,
                            last_name: user.last_name,
                        });
                }
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let viewers = viewers_by_product.remove(&row.id).unwrap_or_default();
                AnnotatedProduct {
                    id: row.id,
                    name: row.name,
                    price: row.price,
                    country: row.country,
                    owner_id: row.owner_id,
                    favorite_count: row.favorite_count,
                    annotated_likes: row.annotated_likes,
                    rating: row.rating,
                    owner_name: row.owner_name,
                    viewers,
                }
            })
            .collect())
    }
}

impl ProductRepository for DbProductRepository {
    async fn list_annotated(
        &self,
        filter: &ProductFilter,
        sort_by: ProductSortBy,
    ) -> Result<Vec<AnnotatedProduct>, CatalogServiceError> {
        let (where_clause, values) = filter_clause(filter);
        let rows = self.query_annotated(&where_clause, values, sort_by).await?;
        self.attach_viewers(rows).await
    }

    async fn find_annotated(
        &self,
        id: i32,
    ) -> Result<Option<AnnotatedProduct>, CatalogServiceError> {
        let rows = self
            .query_annotated(" AND p.id = $1", vec![id.into()], ProductSortBy::Id)
            .await?;
        Ok(self.attach_viewers(rows).await?.into_iter().next())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, CatalogServiceError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn create(
        &self,
        product: &NewProduct,
        owner_id: Uuid,
    ) -> Result<Product, CatalogServiceError> {
        let model = products::ActiveModel {
            name: Set(product.name.clone()),
            price: Set(product.price),
            country: Set(product.country.clone()),
            owner_id: Set(Some(owner_id)),
            favorite_count: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(product_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<(), CatalogServiceError> {
        let mut am = products::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &changes.name {
            am.name = Set(name.clone());
        }
        if let Some(price) = changes.price {
            am.price = Set(price);
        }
        if let Some(country) = &changes.country {
            am.country = Set(country.clone());
        }
        am.update(&self.db).await.context("update product")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let result = products::Entity::delete_many()
            .filter(products::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }

    async fn set_favorite_count(
        &self,
        product_id: i32,
        count: u64,
    ) -> Result<(), CatalogServiceError> {
        products::ActiveModel {
            id: Set(product_id),
            favorite_count: Set(Some(count as i32)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set favorite count")?;
        Ok(())
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        country: model.country,
        owner_id: model.owner_id,
        favorite_count: model.favorite_count,
    }
}

// ── Relation repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRelationRepository {
    pub db: DatabaseConnection,
}

impl RelationRepository for DbRelationRepository {
    async fn ensure(
        &self,
        user_id: Uuid,
        product_id: i32,
    ) -> Result<(Relation, bool), CatalogServiceError> {
        let existing = user_relations::Entity::find()
            .filter(user_relations::Column::UserId.eq(user_id))
            .filter(user_relations::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .context("find relation for pair")?;

        match existing {
            Some(model) => Ok((relation_from_model(model), false)),
            None => {
                let model = user_relations::ActiveModel {
                    user_id: Set(user_id),
                    product_id: Set(product_id),
                    is_liked: Set(false),
                    in_favorites: Set(false),
                    rate: Set(None),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("create relation with defaults")?;
                Ok((relation_from_model(model), true))
            }
        }
    }

    async fn apply(
        &self,
        relation_id: i32,
        patch: &RelationPatch,
    ) -> Result<Relation, CatalogServiceError> {
        let mut am = user_relations::ActiveModel {
            id: Set(relation_id),
            ..Default::default()
        };
        if let Some(is_liked) = patch.is_liked {
            am.is_liked = Set(is_liked);
        }
        if let Some(in_favorites) = patch.in_favorites {
            am.in_favorites = Set(in_favorites);
        }
        if let Some(rate) = patch.rate {
            am.rate = Set(rate);
        }
        let model = am.update(&self.db).await.context("apply relation patch")?;
        Ok(relation_from_model(model))
    }

    async fn count_favorites(&self, product_id: i32) -> Result<u64, CatalogServiceError> {
        user_relations::Entity::find()
            .filter(user_relations::Column::ProductId.eq(product_id))
            .filter(user_relations::Column::InFavorites.eq(true))
            .count(&self.db)
            .await
            .context("count favorited relations")
            .map_err(Into::into)
    }
}

fn relation_from_model(model: user_relations::Model) -> Relation {
    Relation {
        id: model.id,
        user_id: model.user_id,
        product_id: model.product_id,
        is_liked: model.is_liked,
        in_favorites: model.in_favorites,
        rate: model.rate,
    }
}
