pub use sea_orm_migration::prelude::*;

mod m20251101_000001_character_status;
mod m20251101_000002_ship_history;
mod m20251101_000003_eve_character_token;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_character_status::Migration),
            Box::new(m20251101_000002_ship_history::Migration),
            Box::new(m20251101_000003_eve_character_token::Migration),
        ]
    }
}
