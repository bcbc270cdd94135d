use serde::{Deserialize, Serialize};

use crate::error::ScoutError;

/// A full recipe as shown in the detail view and stored in bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    /// Derived from bookmark membership, never sent to the server.
    #[serde(default)]
    pub bookmarked: bool,
    /// Present on recipes created with the caller's own API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

impl Ingredient {
    /// Parse a `quantity,unit,description` line from the recipe form.
    ///
    /// The quantity may be empty (`",tsp,salt"`), the unit may be empty
    /// (`"2,,eggs"`), the description keeps any further commas. Fewer than
    /// three fields or a non-numeric quantity is a format error.
    pub fn parse(input: &str) -> Result<Self, ScoutError> {
        let mut parts = input.splitn(3, ',');
        let quantity = parts.next().map(str::trim);
        let unit = parts.next().map(str::trim);
        let description = parts.next().map(str::trim);

        let (quantity, unit, description) = match (quantity, unit, description) {
            (Some(q), Some(u), Some(d)) if !d.is_empty() => (q, u, d),
            _ => {
                return Err(ScoutError::IngredientFormat {
                    input: input.to_string(),
                })
            }
        };

        let quantity = if quantity.is_empty() {
            None
        } else {
            Some(
                quantity
                    .parse::<f64>()
                    .map_err(|_| ScoutError::IngredientFormat {
                        input: input.to_string(),
                    })?,
            )
        };

        Ok(Ingredient {
            quantity,
            unit: unit.to_string(),
            description: description.to_string(),
        })
    }
}

/// Projection of a recipe for the search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// The current query, its full (unpaged) result set and the page cursor.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub results_per_page: usize,
    /// 1-based.
    pub current_page: usize,
    pub num_pages: usize,
}

impl SearchState {
    pub fn new(results_per_page: usize) -> Self {
        SearchState {
            query: String::new(),
            results: Vec::new(),
            results_per_page,
            current_page: 1,
            num_pages: 0,
        }
    }
}
