//! Server configuration parsed from environment variables.
//!
//! Every setting has a default so the server starts with no environment at
//! all: in-memory storage on port 3000. Unparseable values fall back to the
//! default rather than aborting startup.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_LIST_LIMIT: usize = 100;
/// Hard ceiling on `GET /memes?limit=`.
pub const MAX_LIST_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Origin prepended to meme paths in API responses, without trailing slash.
    pub public_base_url: String,
    pub max_upload_bytes: usize,
    pub list_default_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `DATABASE_URL`: Postgres URL; unset or empty keeps memes in memory
    /// - `DB_MAX_CONNECTIONS`: pool size (default 5)
    /// - `PUBLIC_BASE_URL`: origin used in returned meme URLs (default `http://localhost:{PORT}`)
    /// - `MAX_UPLOAD_BYTES`: largest accepted image (default 10 MiB)
    /// - `LIST_DEFAULT_LIMIT`: gallery page size when no `limit` is given (default 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();
        let list_default_limit = parse_or(&lookup, "LIST_DEFAULT_LIMIT", DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

        Self {
            port,
            database_url,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            public_base_url,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            list_default_limit,
        }
    }

    /// Public URL of a stored meme.
    #[must_use]
    pub fn meme_url(&self, id: uuid::Uuid) -> String {
        format!("{}/memes/{id}", self.public_base_url)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
