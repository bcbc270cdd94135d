use thiserror::Error;

/// Errors that can occur while talking to the recipe API or mutating
/// local state
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Recipe API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// An ingredient field did not match `quantity,unit,description`
    #[error("Wrong ingredient format {input:?}: expected quantity,unit,description")]
    IngredientFormat { input: String },

    /// A form field that must be numeric was not
    #[error("Field {field:?} is not a number: {value:?}")]
    NumberFormat { field: String, value: String },

    /// A required form field was absent or empty
    #[error("Missing required field {field:?}")]
    MissingField { field: String },

    /// Operation needs a loaded recipe and there is none
    #[error("No recipe is currently loaded")]
    NoRecipe,

    /// Reading or writing the bookmark file failed
    #[error("Bookmark storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The bookmark file held something that is not a recipe list
    #[error("Bookmark data error: {0}")]
    Persist(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
