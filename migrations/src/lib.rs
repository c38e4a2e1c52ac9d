use sea_orm_migration::prelude::*;

pub mod m20250115_000001_create_theme_images;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250115_000001_create_theme_images::Migration)]
    }
}
