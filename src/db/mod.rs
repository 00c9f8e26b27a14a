pub mod bids;
pub mod gigs;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM database connection pool.
///
/// The URL comes from the caller's `AppConfig` — this module never reads the
/// environment itself.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
