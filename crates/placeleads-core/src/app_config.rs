use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Provider credential. Only required when a search is requested, so
    /// offline commands (list, export, status edits) work without it.
    pub places_api_key: Option<String>,
    pub store_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Settling delay between paged text-search requests.
    pub page_delay_ms: u64,
    /// Upper clamp for a search's target lead count.
    pub max_target_count: usize,
    pub legacy_base_url: String,
    pub places_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("store_path", &self.store_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("max_target_count", &self.max_target_count)
            .field("legacy_base_url", &self.legacy_base_url)
            .field("places_base_url", &self.places_base_url)
            .finish()
    }
}
