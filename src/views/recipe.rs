use std::fmt::Write;

use crate::model::Recipe;
use crate::views::{error_markup, format_quantity, spinner_markup, Frame};

/// Detail view for the currently loaded recipe.
#[derive(Debug, Default)]
pub struct RecipeView {
    frame: Frame,
}

impl RecipeView {
    pub fn render(&mut self, recipe: &Recipe) -> Option<String> {
        self.frame.push(markup(recipe))
    }

    pub fn render_spinner(&mut self) -> Option<String> {
        self.frame.push(spinner_markup())
    }

    pub fn render_error(&mut self) -> Option<String> {
        self.frame.push(error_markup(
            "We could not find that recipe. Please try another one!",
        ))
    }
}

fn markup(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title);
    let _ = write!(
        out,
        "by {} | {} minutes | {} servings",
        recipe.publisher, recipe.cooking_time, recipe.servings
    );
    if recipe.bookmarked {
        let _ = write!(out, " | bookmarked");
    }
    if recipe.key.is_some() {
        let _ = write!(out, " | your recipe");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Ingredients:");
    for ingredient in &recipe.ingredients {
        let _ = write!(out, "  - ");
        if let Some(quantity) = ingredient.quantity {
            let _ = write!(out, "{} ", format_quantity(quantity));
        }
        if !ingredient.unit.is_empty() {
            let _ = write!(out, "{} ", ingredient.unit);
        }
        let _ = writeln!(out, "{}", ingredient.description);
    }

    let _ = write!(out, "Source: {}", recipe.source_url);
    out
}
