use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Presentation settings of the rendered document.
///
/// The initial selection is always `all` / `none` and is not configurable.
#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    /// Element id of the list container in the rendered document
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Document title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            title: default_title(),
        }
    }
}

// Default value functions
fn default_container_id() -> String {
    "recipe-container".to_string()
}

fn default_title() -> String {
    "Recipes".to_string()
}

impl BoardConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOARD__ prefix
    /// 2. recipe-board.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOARD__CONTAINER_ID
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from TOML text, ignoring the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<BoardConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-board").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
