use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRelations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRelations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRelations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserRelations::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserRelations::IsLiked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserRelations::InFavorites)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(UserRelations::Rate).small_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRelations::Table, UserRelations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRelations::Table, UserRelations::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One relation per (user, product) pair.
        manager
            .create_index(
                Index::create()
                    .table(UserRelations::Table)
                    .col(UserRelations::UserId)
                    .col(UserRelations::ProductId)
                    .name("uq_user_relations_user_id_product_id")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRelations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserRelations {
    Table,
    Id,
    UserId,
    ProductId,
    IsLiked,
    InFavorites,
    Rate,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
