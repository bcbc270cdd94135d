pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod views;

pub use crate::api::{HttpRecipeApi, NewRecipe, RecipeApi, RemoteRecipe, RemoteSummary};
pub use crate::config::Settings;
pub use crate::controller::{Controller, Event, Presenter};
pub use crate::error::ScoutError;
pub use crate::model::{Ingredient, Recipe, SearchResultItem, SearchState};
pub use crate::state::{App, AppState};
pub use crate::store::{BookmarkStore, JsonFileStore, MemoryStore};

/// Fetch a single recipe using the ambient configuration.
///
/// One-shot convenience for callers that do not want to wire up an
/// [`App`]; the bookmark flag is always false here.
pub async fn fetch_recipe(id: &str) -> Result<Recipe, ScoutError> {
    let settings = Settings::load()?;
    let api = HttpRecipeApi::new(&settings)?;
    let remote = api.fetch_recipe(id).await?;
    Ok(Recipe::from(remote))
}

/// Run a free-text search using the ambient configuration.
pub async fn search_recipes(query: &str) -> Result<Vec<SearchResultItem>, ScoutError> {
    let settings = Settings::load()?;
    let api = HttpRecipeApi::new(&settings)?;
    let results = api.search(query).await?;
    Ok(results.into_iter().map(SearchResultItem::from).collect())
}
