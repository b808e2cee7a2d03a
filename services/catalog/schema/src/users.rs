use sea_orm::entity::prelude::*;

/// User record mirrored from the identity provider.
///
/// Rows are provisioned out of band; the catalog only reads them for
/// owner and viewer projections.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
    #[sea_orm(has_many = "super::user_relations::Entity")]
    UserRelations,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::user_relations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRelations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
