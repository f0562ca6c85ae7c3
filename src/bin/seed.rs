use movie_cart_api::{
    db::{create_pool, migrate, orm_from_pool},
    dto::users::CreateUserRequest,
    store::{PgUserStore, StoreError, UserStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();
    let database_url = std::env::var("DATABASE_URL")?;

    let pool = create_pool(&database_url).await?;
    // Ensure migrations are applied.
    migrate(&pool).await?;

    let store = PgUserStore::new(orm_from_pool(pool));
    let users = [
        ("Ada Lovelace", "ada@example.com", "UK"),
        ("Grace Hopper", "grace@example.com", "US"),
        ("Satoshi Tajiri", "satoshi@example.com", "JP"),
    ];

    for (name, email, country) in users {
        let request = CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            country: country.to_string(),
        };
        match store.create_user(request).await {
            Ok(user) => tracing::info!(user_id = %user.id, email, "seeded user"),
            Err(StoreError::DuplicateEntry(_)) => tracing::info!(email, "user already present"),
            Err(err) => return Err(err.into()),
        }
    }

    let total = store.list_users().await?.len();
    tracing::info!(total, "seed completed");
    Ok(())
}
