//! Client configuration.

/// Public endpoint of the resource API.
pub const API_URL: &str = "https://api.spigotmc.org/simple/0.2/index.php";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "RESOURCE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Read `RESOURCE_API_URL`, falling back to the public endpoint.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| API_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
        }
    }
}
