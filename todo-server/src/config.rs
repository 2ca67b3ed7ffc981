//! Server configuration
//!
//! Connection settings for the document store and the HTTP listener,
//! loaded from the environment at startup.

/// Default database name when `MONGO_DATABASE` is not set
pub const DEFAULT_DATABASE: &str = "test_db";

/// Default listen address when `TODO_BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB host name or address
    pub mongo_host: String,

    /// MongoDB port
    pub mongo_port: u16,

    /// Database holding the `todos` collection
    pub database: String,

    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(mongo_host: impl Into<String>, mongo_port: u16) -> Self {
        Self {
            mongo_host: mongo_host.into(),
            mongo_port,
            database: DEFAULT_DATABASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MONGO_HOST (required)
    /// - MONGO_PORT (required)
    /// - MONGO_DATABASE (optional, default: test_db)
    /// - TODO_BIND_ADDR (optional, default: 0.0.0.0:8000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_host = lookup("MONGO_HOST")
            .ok_or_else(|| anyhow::anyhow!("MONGO_HOST environment variable not set"))?;

        let mongo_port = lookup("MONGO_PORT")
            .ok_or_else(|| anyhow::anyhow!("MONGO_PORT environment variable not set"))?;

        let mongo_port = mongo_port
            .trim()
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("MONGO_PORT is not a valid port: {}", mongo_port))?;

        let mut config = Self::new(mongo_host, mongo_port);

        if let Some(database) = lookup("MONGO_DATABASE") {
            config.database = database;
        }

        if let Some(bind_addr) = lookup("TODO_BIND_ADDR") {
            config.bind_addr = bind_addr;
        }

        Ok(config)
    }

    /// Connection string for the MongoDB client
    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}:{}", self.mongo_host, self.mongo_port)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mongo_host.trim().is_empty() {
            anyhow::bail!("mongo_host cannot be empty");
        }

        if self.mongo_port == 0 {
            anyhow::bail!("mongo_port must be greater than 0");
        }

        if self.database.trim().is_empty() {
            anyhow::bail!("database cannot be empty");
        }

        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        Ok(())
    }
}
