use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions};

pub type DbPool = sqlx::PgPool;
pub type OrmConn = DatabaseConnection;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create the sqlx pool used by the cart store.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Wrap an existing sqlx pool for SeaORM without opening new connections.
pub fn orm_from_pool(pool: DbPool) -> OrmConn {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool)
}

/// Apply pending migrations from `migrations/`.
pub async fn migrate(pool: &DbPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("migrations up to date");
    Ok(())
}
