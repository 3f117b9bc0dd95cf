pub use sea_orm_migration::prelude::*;

mod m20260212_000001_create_foods_table;
mod m20260212_000002_create_users_table;
mod m20260212_000003_create_captures_table;
mod m20260212_000004_create_favorites_table;
mod m20260212_000005_create_constellations_table;
mod m20260212_000006_create_constellation_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260212_000001_create_foods_table::Migration),
            Box::new(m20260212_000002_create_users_table::Migration),
            Box::new(m20260212_000003_create_captures_table::Migration),
            Box::new(m20260212_000004_create_favorites_table::Migration),
            Box::new(m20260212_000005_create_constellations_table::Migration),
            Box::new(m20260212_000006_create_constellation_items_table::Migration),
        ]
    }
}
