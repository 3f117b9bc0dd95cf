use crate::server::{config::Config, detection::DetectionClient, error::Error};

/// Build the detection client from the configured API settings
pub fn build_detection_client(config: &Config) -> DetectionClient {
    DetectionClient::new(config)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
