use std::env;

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub omdb: OmdbConfig,
}

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
            omdb: OmdbConfig::from_env()?,
        })
    }
}

impl OmdbConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OMDB_API_KEY")
            .map_err(|_| anyhow::anyhow!("OMDB_API_KEY is not set"))?;
        let base_url =
            env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_OMDB_BASE_URL.to_string());
        let timeout_secs = env::var("OMDB_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(10);
        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}
