use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration: API endpoint plus the handful of UI tunables.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Base URL of the recipe API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Developer key, appended to every request when set. Required for
    /// uploads; searches work without one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Page size for search results, fixed for the session
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How long the submit confirmation stays on screen, in seconds
    #[serde(default = "default_close_delay")]
    pub close_delay_secs: f64,
    /// Where the bookmark file lives
    #[serde(default = "default_bookmarks_path")]
    pub bookmarks_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: default_api_url(),
            api_key: None,
            results_per_page: default_results_per_page(),
            timeout: default_timeout(),
            close_delay_secs: default_close_delay(),
            bookmarks_path: default_bookmarks_path(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://forkify-api.herokuapp.com/api/v2/recipes".to_string()
}

fn default_results_per_page() -> usize {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_close_delay() -> f64 {
    2.5
}

fn default_bookmarks_path() -> String {
    "bookmarks.json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCOUT__ prefix
    /// 2. recipe-scout.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCOUT__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-scout").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
