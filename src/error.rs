use thiserror::Error;

use crate::model::RecipeId;

/// Errors that can occur while driving the recipe board
#[derive(Error, Debug)]
pub enum BoardError {
    /// A toggle targeted a recipe that is not on display
    #[error("Recipe {0} is not displayed")]
    UnknownRecipe(RecipeId),

    /// No display surface was supplied at startup
    #[error("No display surface to render into")]
    MissingSurface,

    /// A textual event could not be understood
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// The built-in recipe data could not be decoded
    #[error("Failed to load recipes: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading events or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
