//! Configuration module

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the todo API
    pub api_url: String,
}
