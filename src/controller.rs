use std::time::Duration;

use log::error;

use crate::config::Settings;
use crate::state::App;
use crate::views::{
    BookmarksView, NoticeView, PaginationView, RecipeView, Region, ResultsView,
};

/// A user interaction, one variant per handler in the UI.
#[derive(Debug, Clone)]
pub enum Event {
    OpenRecipe { id: String },
    Search { query: String },
    GoToPage { page: usize },
    SetServings { servings: u32 },
    ToggleBookmark,
    ShowBookmarks,
    SubmitRecipe { form: Vec<(String, String)> },
}

/// Receives rendered frames. The binary prints them to the terminal;
/// tests record them.
pub trait Presenter {
    fn present(&mut self, region: Region, markup: &str);
}

/// Glue between events, state operations and the views.
///
/// Every failure is caught here: it is logged, rendered as an error
/// frame in the affected region, and never propagated, so the session
/// stays interactive. Overlapping async loads are not fenced; the last
/// reply to arrive wins.
pub struct Controller<P: Presenter> {
    app: App,
    presenter: P,
    close_delay: Duration,
    recipe_view: RecipeView,
    results_view: ResultsView,
    pagination_view: PaginationView,
    bookmarks_view: BookmarksView,
    notice_view: NoticeView,
}

impl<P: Presenter> Controller<P> {
    pub fn new(app: App, presenter: P, settings: &Settings) -> Self {
        Controller {
            app,
            presenter,
            close_delay: Duration::from_secs_f64(settings.close_delay_secs),
            recipe_view: RecipeView::default(),
            results_view: ResultsView::default(),
            pagination_view: PaginationView::default(),
            bookmarks_view: BookmarksView::default(),
            notice_view: NoticeView::default(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub async fn dispatch(&mut self, event: Event) {
        match event {
            Event::OpenRecipe { id } => self.open_recipe(&id).await,
            Event::Search { query } => self.search(&query).await,
            Event::GoToPage { page } => self.go_to_page(page),
            Event::SetServings { servings } => self.set_servings(servings),
            Event::ToggleBookmark => self.toggle_bookmark(),
            Event::ShowBookmarks => self.show_bookmarks(),
            Event::SubmitRecipe { form } => self.submit_recipe(form).await,
        }
    }

    fn show(&mut self, region: Region, frame: Option<String>) {
        if let Some(markup) = frame {
            self.presenter.present(region, &markup);
        }
    }

    fn render_recipe(&mut self) {
        let frame = match self.app.state.recipe.as_ref() {
            Some(recipe) => self.recipe_view.render(recipe),
            None => return,
        };
        self.show(Region::Recipe, frame);
    }

    /// Re-render the current result page and the pagination under it.
    fn render_results_page(&mut self, page: Option<usize>) {
        let selected = self.app.state.recipe.as_ref().map(|r| r.id.clone());
        let items = self.app.search_results_page(page).to_vec();
        let frame = self.results_view.render(&items, selected.as_deref());
        self.show(Region::Results, frame);

        let frame = self.pagination_view.render(&self.app.state.search);
        self.show(Region::Pagination, frame);
    }

    async fn open_recipe(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        let frame = self.recipe_view.render_spinner();
        self.show(Region::Recipe, frame);

        // Mark the entry in the result list and refresh the bookmark list
        if !self.app.state.search.results.is_empty() {
            let items = self.app.search_results_page(None).to_vec();
            let frame = self.results_view.render(&items, Some(id));
            self.show(Region::Results, frame);
        }
        let frame = self.bookmarks_view.render(&self.app.state.bookmarks);
        self.show(Region::Bookmarks, frame);

        if let Err(err) = self.app.load_recipe(id).await {
            error!("open recipe {id}: {err}");
            let frame = self.recipe_view.render_error();
            self.show(Region::Recipe, frame);
            return;
        }
        self.render_recipe();
    }

    async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let frame = self.results_view.render_spinner();
        self.show(Region::Results, frame);

        if let Err(err) = self.app.load_search_results(query).await {
            error!("search {query:?}: {err}");
            let frame = self.results_view.render_error();
            self.show(Region::Results, frame);
            return;
        }
        self.render_results_page(Some(1));
    }

    fn go_to_page(&mut self, page: usize) {
        self.render_results_page(Some(page));
    }

    fn set_servings(&mut self, servings: u32) {
        if servings == 0 {
            return;
        }
        if let Err(err) = self.app.update_servings(servings) {
            error!("update servings: {err}");
            return;
        }
        self.render_recipe();
    }

    fn toggle_bookmark(&mut self) {
        let Some(recipe) = self.app.state.recipe.clone() else {
            return;
        };

        let result = if recipe.bookmarked {
            self.app.delete_bookmark(&recipe.id)
        } else {
            self.app.add_bookmark(recipe)
        };
        if let Err(err) = result {
            error!("bookmark toggle: {err}");
            let frame = self.bookmarks_view.render_error();
            self.show(Region::Bookmarks, frame);
            return;
        }

        self.render_recipe();
        let frame = self.bookmarks_view.render(&self.app.state.bookmarks);
        self.show(Region::Bookmarks, frame);
    }

    fn show_bookmarks(&mut self) {
        let frame = self.bookmarks_view.render(&self.app.state.bookmarks);
        self.show(Region::Bookmarks, frame);
    }

    async fn submit_recipe(&mut self, form: Vec<(String, String)>) {
        let frame = self.notice_view.render_spinner();
        self.show(Region::Notice, frame);

        if let Err(err) = self.app.upload_recipe(&form).await {
            error!("upload recipe: {err}");
            let frame = self.notice_view.render_error(&err.to_string());
            self.show(Region::Notice, frame);
            return;
        }

        self.render_recipe();
        let frame = self
            .notice_view
            .render_message("Recipe was successfully uploaded :)");
        self.show(Region::Notice, frame);
        let frame = self.bookmarks_view.render(&self.app.state.bookmarks);
        self.show(Region::Bookmarks, frame);
        if !self.app.state.search.results.is_empty() {
            self.render_results_page(None);
        }

        // Keep the confirmation up briefly, then clear it
        tokio::time::sleep(self.close_delay).await;
        let frame = self.notice_view.clear();
        self.show(Region::Notice, frame);
    }
}
