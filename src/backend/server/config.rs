/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development.
 *
 * # Variables
 *
 * - `PORT` - listen port (default 5001)
 * - `ALLOWED_ORIGINS` - comma-separated CORS allow-list (defaults to the
 *   local dev origins plus the published frontend)
 * - `DATABASE_URL` - PostgreSQL connection string (optional)
 * - `OPENAI_API_KEY` - completion service key
 * - `OPENAI_BASE_URL` - completion endpoint override (default OpenAI)
 * - `OPENAI_MODEL` - completion model (default gpt-3.5-turbo)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize fall back to degraded alternatives and
 * the server continues without them.
 */
use sqlx::PgPool;

use crate::backend::chat::OpenAiConfig;

/// Origins allowed during dev plus the published frontend
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "https://lucasdoarruda.github.io",
];

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Runtime configuration for the backend server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the server listens on
    pub port: u16,
    /// CORS origin allow-list
    pub allowed_origins: Vec<String>,
    /// PostgreSQL connection string; `None` falls back to the in-memory store
    pub database_url: Option<String>,
    /// Completion service configuration
    pub openai: OpenAiConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5001);

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(origins) => origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        let database_url = std::env::var("DATABASE_URL").ok();

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("OPENAI_API_KEY not set; completion requests will fail upstream");
            String::new()
        });

        let openai = OpenAiConfig {
            api_key,
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
        };

        Self {
            port,
            allowed_origins,
            database_url,
            openai,
        }
    }
}

/// Load and initialize the database connection pool
///
/// Returns `None` if `DATABASE_URL` is not set or the connection fails, in
/// which case the caller falls back to the in-memory store. Migration
/// failures are logged but do not prevent startup.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Falling back to the in-memory store.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {e:?}");
            tracing::warn!("Falling back to the in-memory store.");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already have been applied out of band
            tracing::error!("Failed to run database migrations: {e:?}");
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }

    Some(pool)
}
