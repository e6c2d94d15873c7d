use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Connection pool settings, overridable through the environment.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            min_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_secs(name: &str, default: Duration) -> Duration {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

impl PoolConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_connections: env_u32("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env_u32("DB_MIN_CONNECTIONS", defaults.min_connections),
            acquire_timeout: env_secs("DB_ACQUIRE_TIMEOUT", defaults.acquire_timeout),
            idle_timeout: env_secs("DB_IDLE_TIMEOUT", defaults.idle_timeout),
            max_lifetime: env_secs("DB_MAX_LIFETIME", defaults.max_lifetime),
        }
    }
}

pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let config = PoolConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .test_before_acquire(true)
        .connect(database_url)
        .await?;

    tracing::info!(
        "Database pool created: max={}, min={}",
        config.max_connections,
        config.min_connections
    );

    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
