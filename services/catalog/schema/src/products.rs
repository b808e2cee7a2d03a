use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Catalog product.
///
/// `favorite_count` is denormalized: it is written only by the favorite
/// recount after a relation write, never by API clients.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub price: Decimal,
    pub country: String,
    pub owner_id: Option<Uuid>,
    pub favorite_count: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::user_relations::Entity")]
    UserRelations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::user_relations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRelations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
