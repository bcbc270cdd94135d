use std::fmt::Write;

use crate::model::Recipe;
use crate::views::{error_markup, Frame};

/// The saved-recipes list.
#[derive(Debug, Default)]
pub struct BookmarksView {
    frame: Frame,
}

impl BookmarksView {
    pub fn render(&mut self, bookmarks: &[Recipe]) -> Option<String> {
        if bookmarks.is_empty() {
            return self.frame.push(
                "No bookmarks yet. Find a nice recipe and bookmark it :)".to_string(),
            );
        }
        self.frame.push(markup(bookmarks))
    }

    pub fn render_error(&mut self) -> Option<String> {
        self.frame.push(error_markup("Could not show your bookmarks."))
    }
}

fn markup(bookmarks: &[Recipe]) -> String {
    let mut out = String::from("Bookmarks:");
    for recipe in bookmarks {
        let _ = write!(out, "\n  {}  {} ({})", recipe.id, recipe.title, recipe.publisher);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn bookmark(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            publisher: "Pub".to_string(),
            source_url: String::new(),
            image_url: String::new(),
            servings: 2,
            cooking_time: 10,
            ingredients: vec![Ingredient {
                quantity: Some(1.0),
                unit: String::new(),
                description: "egg".to_string(),
            }],
            bookmarked: true,
            key: None,
        }
    }

    #[test]
    fn test_render_lists_in_order() {
        let mut view = BookmarksView::default();
        let markup = view
            .render(&[bookmark("a", "Pizza"), bookmark("b", "Pasta")])
            .unwrap();
        let pizza = markup.find("Pizza").unwrap();
        let pasta = markup.find("Pasta").unwrap();
        assert!(pizza < pasta);
    }

    #[test]
    fn test_empty_list_renders_hint() {
        let mut view = BookmarksView::default();
        assert!(view.render(&[]).unwrap().contains("No bookmarks yet"));
    }
}
