use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Settings;
use crate::error::ScoutError;
use crate::model::{Ingredient, Recipe, SearchResultItem};

/// A recipe as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub key: Option<String>,
}

impl From<RemoteRecipe> for Recipe {
    fn from(remote: RemoteRecipe) -> Self {
        Recipe {
            id: remote.id,
            title: remote.title,
            publisher: remote.publisher,
            source_url: remote.source_url,
            image_url: remote.image_url,
            servings: remote.servings,
            cooking_time: remote.cooking_time,
            ingredients: remote.ingredients,
            bookmarked: false,
            key: remote.key,
        }
    }
}

/// A list entry as the search endpoint returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

impl From<RemoteSummary> for SearchResultItem {
    fn from(remote: RemoteSummary) -> Self {
        SearchResultItem {
            id: remote.id,
            title: remote.title,
            publisher: remote.publisher,
            image_url: remote.image_url,
            key: remote.key,
        }
    }
}

/// Request body for creating a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct RecipeData {
    recipe: RemoteRecipe,
}

#[derive(Deserialize)]
struct SearchData {
    recipes: Vec<RemoteSummary>,
}

/// Error body the API sends with non-2xx statuses.
#[derive(Deserialize)]
struct ApiFailure {
    #[serde(default)]
    message: String,
}

/// The three operations the remote recipe API offers.
#[async_trait]
pub trait RecipeApi {
    async fn fetch_recipe(&self, id: &str) -> Result<RemoteRecipe, ScoutError>;
    async fn search(&self, query: &str) -> Result<Vec<RemoteSummary>, ScoutError>;
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RemoteRecipe, ScoutError>;
}

/// HTTP implementation backed by reqwest.
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    key: Option<String>,
}

impl HttpRecipeApi {
    pub fn new(settings: &Settings) -> Result<Self, ScoutError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(concat!("recipe-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpRecipeApi {
            client,
            base_url: settings.api_url.clone(),
            key: settings.api_key.clone(),
        })
    }

    /// Point the client at a different endpoint, mainly for tests.
    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, key: Option<String>) -> Self {
        HttpRecipeApi {
            client: Client::new(),
            base_url: base_url.into(),
            key,
        }
    }

    /// Query parameters shared by every request.
    fn key_param(&self) -> Vec<(&'static str, String)> {
        self.key
            .iter()
            .map(|key| ("key", key.clone()))
            .collect()
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ScoutError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiFailure>()
                .await
                .map(|failure| failure.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("").to_string());
            return Err(ScoutError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn fetch_recipe(&self, id: &str) -> Result<RemoteRecipe, ScoutError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, id))
            .query(&self.key_param())
            .send()
            .await?;

        let data: RecipeData = Self::decode(response).await?;
        debug!("fetched recipe {}", data.recipe.id);
        Ok(data.recipe)
    }

    async fn search(&self, query: &str) -> Result<Vec<RemoteSummary>, ScoutError> {
        let mut params = vec![("search", query.to_string())];
        params.extend(self.key_param());

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let data: SearchData = Self::decode(response).await?;
        debug!("search {:?} returned {} recipes", query, data.recipes.len());
        Ok(data.recipes)
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RemoteRecipe, ScoutError> {
        let response = self
            .client
            .post(&self.base_url)
            .query(&self.key_param())
            .json(recipe)
            .send()
            .await?;

        let data: RecipeData = Self::decode(response).await?;
        debug!("created recipe {}", data.recipe.id);
        Ok(data.recipe)
    }
}
