//! Application configuration
//!
//! Read from command-line flags with environment fallbacks. A `.env` file in
//! the working directory is loaded first (see `main.rs`).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use expertise_client::{ClientConfig, HttpClient};
use shared::ListFilters;

use super::{AdminError, AdminResult};
use crate::resources::AdminResource;
use crate::store::ResourceStore;
use crate::ui::ResourcePage;

/// Default page size for list screens
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Search input settle delay
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// API base URL
    #[arg(long = "api-url", env = "EXPERTISE_API_URL", default_value = "http://localhost:8000/api")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long = "token", env = "EXPERTISE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "EXPERTISE_TIMEOUT_SECS", default_value_t = expertise_client::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Rows per page
    #[arg(long = "per-page", env = "EXPERTISE_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Search debounce delay in milliseconds
    #[arg(long = "search-debounce-ms", env = "EXPERTISE_SEARCH_DEBOUNCE_MS", default_value_t = DEFAULT_SEARCH_DEBOUNCE_MS)]
    pub search_debounce_ms: u64,

    /// Directory for rolling log files (logs go to stderr only when unset)
    #[arg(long = "log-dir", env = "EXPERTISE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            token: None,
            timeout_secs: expertise_client::config::DEFAULT_TIMEOUT_SECS,
            per_page: DEFAULT_PER_PAGE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> AdminResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AdminError::Config(format!(
                "API URL must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }
        if self.per_page == 0 {
            return Err(AdminError::Config("per-page must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Page over `R` using the configured page size and search delay
    pub fn page<R: AdminResource, H: HttpClient + 'static>(&self, http: Arc<H>) -> ResourcePage<R, H> {
        let store = ResourceStore::<R, H>::from_http(http).with_filters(ListFilters::new().with_per_page(self.per_page));
        ResourcePage::new(Arc::new(store)).with_search_delay(self.search_debounce())
    }

    /// HTTP client configuration derived from this config
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs);
        match &self.token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}
