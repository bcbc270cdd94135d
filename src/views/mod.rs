mod bookmarks;
mod notice;
mod pagination;
mod recipe;
mod results;

pub use self::bookmarks::BookmarksView;
pub use self::notice::NoticeView;
pub use self::pagination::PaginationView;
pub use self::recipe::RecipeView;
pub use self::results::ResultsView;

/// The UI regions a frame can be addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Recipe,
    Results,
    Pagination,
    Bookmarks,
    Notice,
}

/// Diff cache shared by all views: a render that produces the same
/// markup as the previous one is suppressed.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    last: Option<String>,
}

impl Frame {
    pub(crate) fn push(&mut self, markup: String) -> Option<String> {
        if self.last.as_deref() == Some(markup.as_str()) {
            return None;
        }
        self.last = Some(markup.clone());
        Some(markup)
    }
}

pub(crate) fn spinner_markup() -> String {
    "Loading...".to_string()
}

pub(crate) fn error_markup(message: &str) -> String {
    format!("(!) {message}")
}

/// Render a quantity without a trailing `.0` for whole numbers.
pub(crate) fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        let rendered = format!("{quantity:.2}");
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
