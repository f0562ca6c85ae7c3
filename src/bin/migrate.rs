use movie_cart_api::db::{create_pool, migrate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();
    let database_url = std::env::var("DATABASE_URL")?;
    let pool = create_pool(&database_url).await?;
    migrate(&pool).await?;
    tracing::info!("migrations applied");
    Ok(())
}
