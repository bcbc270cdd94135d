use crate::model::SearchState;
use crate::views::Frame;

/// Prev/next controls under the result list.
///
/// Four cases, driven by the cursor: first page of several, last page,
/// a middle page, or a single page (nothing to render).
#[derive(Debug, Default)]
pub struct PaginationView {
    frame: Frame,
}

impl PaginationView {
    pub fn render(&mut self, search: &SearchState) -> Option<String> {
        self.frame.push(markup(search))
    }
}

fn markup(search: &SearchState) -> String {
    let current = search.current_page;
    let total = search.num_pages;

    // First page, and there are more
    if current == 1 && total > 1 {
        return format!("page {current}/{total} | next: page {}", current + 1);
    }

    // Last page
    if current == total && total > 1 {
        return format!("page {current}/{total} | prev: page {}", current - 1);
    }

    // Somewhere in the middle
    if current > 1 && current < total {
        return format!(
            "page {current}/{total} | prev: page {} | next: page {}",
            current - 1,
            current + 1
        );
    }

    // Single page of results
    String::new()
}
