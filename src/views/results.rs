use std::fmt::Write;

use crate::model::SearchResultItem;
use crate::views::{error_markup, spinner_markup, Frame};

/// List view for one page of search results.
#[derive(Debug, Default)]
pub struct ResultsView {
    frame: Frame,
}

impl ResultsView {
    /// Render a result page; `selected` marks the entry whose recipe is
    /// currently open. An empty page renders the not-found message.
    pub fn render(&mut self, items: &[SearchResultItem], selected: Option<&str>) -> Option<String> {
        if items.is_empty() {
            return self.frame.push(error_markup(
                "No recipes found for your query. Please try again!",
            ));
        }
        self.frame.push(markup(items, selected))
    }

    pub fn render_spinner(&mut self) -> Option<String> {
        self.frame.push(spinner_markup())
    }

    pub fn render_error(&mut self) -> Option<String> {
        self.frame.push(error_markup(
            "No recipes found for your query. Please try again!",
        ))
    }
}

fn markup(items: &[SearchResultItem], selected: Option<&str>) -> String {
    let mut out = String::new();
    for item in items {
        let marker = if selected == Some(item.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let _ = write!(out, "{} {}  {} ({})", marker, item.id, item.title, item.publisher);
        if item.key.is_some() {
            let _ = write!(out, " [your recipe]");
        }
        let _ = writeln!(out);
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<SearchResultItem> {
        vec![
            SearchResultItem {
                id: "a".to_string(),
                title: "Pizza".to_string(),
                publisher: "One".to_string(),
                image_url: String::new(),
                key: None,
            },
            SearchResultItem {
                id: "b".to_string(),
                title: "Pasta".to_string(),
                publisher: "Two".to_string(),
                image_url: String::new(),
                key: Some("k".to_string()),
            },
        ]
    }

    #[test]
    fn test_render_marks_selected() {
        let mut view = ResultsView::default();
        let markup = view.render(&items(), Some("b")).unwrap();
        assert!(markup.contains("> b  Pasta"));
        assert!(markup.contains("  a  Pizza"));
    }

    #[test]
    fn test_render_tags_own_recipes() {
        let mut view = ResultsView::default();
        let markup = view.render(&items(), None).unwrap();
        assert!(markup.contains("Pasta (Two) [your recipe]"));
    }

    #[test]
    fn test_empty_page_renders_not_found() {
        let mut view = ResultsView::default();
        let markup = view.render(&[], None).unwrap();
        assert!(markup.contains("No recipes found"));
    }
}
