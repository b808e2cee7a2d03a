use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users;
mod m20250901_000002_create_products;
mod m20250901_000003_create_user_relations;
mod m20250901_000004_add_missing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users::Migration),
            Box::new(m20250901_000002_create_products::Migration),
            Box::new(m20250901_000003_create_user_relations::Migration),
            Box::new(m20250901_000004_add_missing_indexes::Migration),
        ]
    }
}
