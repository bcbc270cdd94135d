use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recipe_scout::views::Region;
use recipe_scout::{
    App, Controller, Event, Ingredient, MemoryStore, NewRecipe, Presenter, RecipeApi,
    RemoteRecipe, RemoteSummary, ScoutError, Settings,
};

struct StubApi {
    fail: bool,
}

#[async_trait]
impl RecipeApi for StubApi {
    async fn fetch_recipe(&self, id: &str) -> Result<RemoteRecipe, ScoutError> {
        if self.fail {
            return Err(ScoutError::Api {
                status: 400,
                message: format!("Invalid _id: {id}"),
            });
        }
        Ok(RemoteRecipe {
            id: id.to_string(),
            title: "Pizza".to_string(),
            publisher: "Closet Cooking".to_string(),
            source_url: "https://example.com/pizza".to_string(),
            image_url: "https://example.com/pizza.jpg".to_string(),
            servings: 4,
            cooking_time: 45,
            ingredients: vec![Ingredient {
                quantity: Some(2.0),
                unit: "cup".to_string(),
                description: "flour".to_string(),
            }],
            key: None,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<RemoteSummary>, ScoutError> {
        if self.fail {
            return Err(ScoutError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok((0..23)
            .map(|n| RemoteSummary {
                id: format!("s{n}"),
                title: format!("{query} {n}"),
                publisher: "Pub".to_string(),
                image_url: String::new(),
                key: None,
            })
            .collect())
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RemoteRecipe, ScoutError> {
        Ok(RemoteRecipe {
            id: "created-1".to_string(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            source_url: recipe.source_url.clone(),
            image_url: recipe.image_url.clone(),
            servings: recipe.servings,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients.clone(),
            key: Some("user-key".to_string()),
        })
    }
}

#[derive(Clone, Default)]
struct RecordingPresenter {
    frames: Arc<Mutex<Vec<(Region, String)>>>,
}

impl RecordingPresenter {
    fn frames(&self) -> Vec<(Region, String)> {
        self.frames.lock().unwrap().clone()
    }

    fn frames_for(&self, region: Region) -> Vec<String> {
        self.frames()
            .into_iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, markup)| markup)
            .collect()
    }

    fn clear(&self) {
        self.frames.lock().unwrap().clear();
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, region: Region, markup: &str) {
        self.frames.lock().unwrap().push((region, markup.to_string()));
    }
}

fn make_controller(fail: bool) -> (Controller<RecordingPresenter>, RecordingPresenter) {
    let settings = Settings {
        close_delay_secs: 0.0,
        ..Settings::default()
    };
    let app = App::new(
        Box::new(StubApi { fail }),
        Box::new(MemoryStore::default()),
        &settings,
    )
    .unwrap();
    let presenter = RecordingPresenter::default();
    let controller = Controller::new(app, presenter.clone(), &settings);
    (controller, presenter)
}

#[tokio::test]
async fn test_search_renders_spinner_results_and_pagination() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::Search {
            query: "pizza".to_string(),
        })
        .await;

    let results = presenter.frames_for(Region::Results);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], "Loading...");
    assert!(results[1].contains("pizza 0"));

    let pagination = presenter.frames_for(Region::Pagination);
    assert_eq!(pagination, ["page 1/3 | next: page 2"]);
}

#[tokio::test]
async fn test_blank_query_is_ignored() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::Search {
            query: "   ".to_string(),
        })
        .await;
    assert!(presenter.frames().is_empty());
}

#[tokio::test]
async fn test_pagination_event_moves_the_window() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::Search {
            query: "pizza".to_string(),
        })
        .await;
    presenter.clear();

    controller.dispatch(Event::GoToPage { page: 2 }).await;
    let results = presenter.frames_for(Region::Results);
    assert!(results[0].contains("pizza 10"));
    let pagination = presenter.frames_for(Region::Pagination);
    assert_eq!(pagination, ["page 2/3 | prev: page 1 | next: page 3"]);
}

#[tokio::test]
async fn test_failed_load_renders_error_and_stays_interactive() {
    let (mut controller, presenter) = make_controller(true);
    controller
        .dispatch(Event::OpenRecipe {
            id: "nope".to_string(),
        })
        .await;

    let frames = presenter.frames_for(Region::Recipe);
    assert!(frames.last().unwrap().contains("could not find that recipe"));

    // The controller swallows the failure; later events still work
    presenter.clear();
    controller
        .dispatch(Event::Search {
            query: "pizza".to_string(),
        })
        .await;
    let results = presenter.frames_for(Region::Results);
    assert_eq!(results[0], "Loading...");
    assert!(results[1].contains("No recipes found"));
}

#[tokio::test]
async fn test_open_recipe_renders_detail() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::OpenRecipe {
            id: "r1".to_string(),
        })
        .await;

    let frames = presenter.frames_for(Region::Recipe);
    assert_eq!(frames[0], "Loading...");
    assert!(frames[1].contains("Pizza"));
    assert!(frames[1].contains("4 servings"));
}

#[tokio::test]
async fn test_servings_event_rerenders_recipe() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::OpenRecipe {
            id: "r1".to_string(),
        })
        .await;
    presenter.clear();

    controller.dispatch(Event::SetServings { servings: 2 }).await;
    let frames = presenter.frames_for(Region::Recipe);
    assert!(frames[0].contains("2 servings"));
    assert!(frames[0].contains("1 cup flour"));
}

#[tokio::test]
async fn test_bookmark_toggle_round_trip() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::OpenRecipe {
            id: "r1".to_string(),
        })
        .await;
    presenter.clear();

    controller.dispatch(Event::ToggleBookmark).await;
    assert!(presenter
        .frames_for(Region::Recipe)
        .last()
        .unwrap()
        .contains("| bookmarked"));
    assert!(presenter
        .frames_for(Region::Bookmarks)
        .last()
        .unwrap()
        .contains("Pizza"));

    presenter.clear();
    controller.dispatch(Event::ToggleBookmark).await;
    assert!(presenter
        .frames_for(Region::Bookmarks)
        .last()
        .unwrap()
        .contains("No bookmarks yet"));
}

#[tokio::test]
async fn test_identical_renders_are_suppressed() {
    let (mut controller, presenter) = make_controller(false);
    controller.dispatch(Event::ShowBookmarks).await;
    controller.dispatch(Event::ShowBookmarks).await;
    assert_eq!(presenter.frames_for(Region::Bookmarks).len(), 1);
}

fn submit_form(ingredient: &str) -> Vec<(String, String)> {
    vec![
        ("title".to_string(), "Masala Chai".to_string()),
        ("publisher".to_string(), "Home".to_string()),
        ("source_url".to_string(), "https://example.com/chai".to_string()),
        ("image_url".to_string(), "https://example.com/chai.jpg".to_string()),
        ("servings".to_string(), "2".to_string()),
        ("cooking_time".to_string(), "15".to_string()),
        ("ingredient-1".to_string(), ingredient.to_string()),
    ]
}

#[tokio::test]
async fn test_submit_renders_confirmation_then_clears_it() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::SubmitRecipe {
            form: submit_form("1,tsp,tea leaves"),
        })
        .await;

    let notices = presenter.frames_for(Region::Notice);
    assert_eq!(
        notices,
        [
            "Loading...",
            "Recipe was successfully uploaded :)",
            ""
        ]
    );
    assert!(presenter
        .frames_for(Region::Recipe)
        .last()
        .unwrap()
        .contains("Masala Chai"));
    assert!(presenter
        .frames_for(Region::Bookmarks)
        .last()
        .unwrap()
        .contains("Masala Chai"));
}

#[tokio::test]
async fn test_submit_failure_renders_notice_error() {
    let (mut controller, presenter) = make_controller(false);
    controller
        .dispatch(Event::SubmitRecipe {
            form: submit_form("2,kg"),
        })
        .await;

    let notices = presenter.frames_for(Region::Notice);
    assert!(notices.last().unwrap().contains("Wrong ingredient format"));
    assert!(presenter.frames_for(Region::Bookmarks).is_empty());
}
