use log::debug;

use crate::api::{NewRecipe, RecipeApi};
use crate::config::Settings;
use crate::error::ScoutError;
use crate::model::{Ingredient, Recipe, SearchResultItem, SearchState};
use crate::store::BookmarkStore;

/// Everything the client knows: the recipe on display, the current
/// search and the bookmark list.
#[derive(Debug)]
pub struct AppState {
    pub recipe: Option<Recipe>,
    pub search: SearchState,
    pub bookmarks: Vec<Recipe>,
}

/// Application root: owns the state and the two external collaborators.
///
/// Constructed once at startup; bookmarks are rehydrated from the store
/// in the constructor.
pub struct App {
    api: Box<dyn RecipeApi + Send + Sync>,
    store: Box<dyn BookmarkStore + Send + Sync>,
    pub state: AppState,
}

impl App {
    pub fn new(
        api: Box<dyn RecipeApi + Send + Sync>,
        store: Box<dyn BookmarkStore + Send + Sync>,
        settings: &Settings,
    ) -> Result<Self, ScoutError> {
        let bookmarks = store.load()?;
        Ok(App {
            api,
            store,
            state: AppState {
                recipe: None,
                search: SearchState::new(settings.results_per_page),
                bookmarks,
            },
        })
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.state.bookmarks.iter().any(|bookmark| bookmark.id == id)
    }

    /// Fetch a recipe by id and make it the current one.
    pub async fn load_recipe(&mut self, id: &str) -> Result<(), ScoutError> {
        let remote = self.api.fetch_recipe(id).await?;
        let mut recipe = Recipe::from(remote);
        recipe.bookmarked = self.is_bookmarked(&recipe.id);
        debug!("loaded recipe {:?}", recipe.title);
        self.state.recipe = Some(recipe);
        Ok(())
    }

    /// Run a search and replace the result set; the cursor goes back to
    /// page 1. Empty queries are the caller's problem.
    pub async fn load_search_results(&mut self, query: &str) -> Result<(), ScoutError> {
        let results = self.api.search(query).await?;

        let search = &mut self.state.search;
        search.query = query.to_string();
        search.results = results.into_iter().map(SearchResultItem::from).collect();
        search.num_pages = search.results.len().div_ceil(search.results_per_page);
        search.current_page = 1;
        debug!("search {:?}: {} results, {} pages", query, search.results.len(), search.num_pages);
        Ok(())
    }

    /// Move the cursor and return that page of results. Pure slicing:
    /// an out-of-range page is an empty slice, not an error.
    pub fn search_results_page(&mut self, page: Option<usize>) -> &[SearchResultItem] {
        let search = &mut self.state.search;
        let page = page.unwrap_or(search.current_page);
        search.current_page = page;

        let start = page.saturating_sub(1).saturating_mul(search.results_per_page);
        let end = page
            .saturating_mul(search.results_per_page)
            .min(search.results.len());
        search.results.get(start..end).unwrap_or(&[])
    }

    /// Rescale every ingredient quantity to the new serving count.
    pub fn update_servings(&mut self, new_servings: u32) -> Result<(), ScoutError> {
        let recipe = self.state.recipe.as_mut().ok_or(ScoutError::NoRecipe)?;

        let ratio = f64::from(new_servings) / f64::from(recipe.servings);
        for ingredient in &mut recipe.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity *= ratio;
            }
        }
        recipe.servings = new_servings;
        Ok(())
    }

    /// Append to the bookmark list (unique by id) and persist it.
    pub fn add_bookmark(&mut self, recipe: Recipe) -> Result<(), ScoutError> {
        if self.is_bookmarked(&recipe.id) {
            return Ok(());
        }

        if let Some(current) = self.state.recipe.as_mut() {
            if current.id == recipe.id {
                current.bookmarked = true;
            }
        }

        let mut recipe = recipe;
        recipe.bookmarked = true;
        self.state.bookmarks.push(recipe);
        self.store.save(&self.state.bookmarks)
    }

    /// Remove the first bookmark with this id and persist the list.
    /// Unknown ids are a no-op.
    pub fn delete_bookmark(&mut self, id: &str) -> Result<(), ScoutError> {
        let Some(index) = self.state.bookmarks.iter().position(|b| b.id == id) else {
            return Ok(());
        };
        self.state.bookmarks.remove(index);

        if let Some(current) = self.state.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = false;
            }
        }

        self.store.save(&self.state.bookmarks)
    }

    /// Assemble a recipe from raw form fields, upload it, make the reply
    /// the current recipe and bookmark it.
    ///
    /// Ingredient fields are the entries whose name starts with
    /// `ingredient-`; parsing stops at the first malformed line.
    pub async fn upload_recipe(&mut self, form: &[(String, String)]) -> Result<(), ScoutError> {
        let mut ingredients = Vec::new();
        for (name, value) in form {
            if !name.starts_with("ingredient-") || value.trim().is_empty() {
                continue;
            }
            ingredients.push(Ingredient::parse(value)?);
        }

        let recipe = NewRecipe {
            title: required_field(form, "title")?,
            source_url: required_field(form, "source_url")?,
            image_url: required_field(form, "image_url")?,
            publisher: required_field(form, "publisher")?,
            cooking_time: numeric_field(form, "cooking_time")?,
            servings: numeric_field(form, "servings")?,
            ingredients,
        };

        let remote = self.api.create_recipe(&recipe).await?;
        let mut created = Recipe::from(remote);
        created.bookmarked = self.is_bookmarked(&created.id);
        self.state.recipe = Some(created.clone());
        self.add_bookmark(created)
    }
}

fn field<'a>(form: &'a [(String, String)], name: &str) -> Option<&'a str> {
    form.iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn required_field(form: &[(String, String)], name: &str) -> Result<String, ScoutError> {
    match field(form, name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ScoutError::MissingField {
            field: name.to_string(),
        }),
    }
}

fn numeric_field(form: &[(String, String)], name: &str) -> Result<u32, ScoutError> {
    let value = required_field(form, name)?;
    value.parse().map_err(|_| ScoutError::NumberFormat {
        field: name.to_string(),
        value,
    })
}
