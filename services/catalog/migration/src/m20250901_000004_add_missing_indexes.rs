use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(UserRelations::Table)
                    .col(UserRelations::ProductId)
                    .name("idx_user_relations_product_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Products::Table)
                    .col(Products::OwnerId)
                    .name("idx_products_owner_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_products_owner_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_relations_product_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum UserRelations {
    Table,
    ProductId,
}

#[derive(Iden)]
enum Products {
    Table,
    OwnerId,
}
