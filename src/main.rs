use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use recipe_scout::views::Region;
use recipe_scout::{App, Controller, Event, HttpRecipeApi, JsonFileStore, Presenter, Settings};

#[derive(Parser)]
#[command(name = "recipe-scout")]
#[command(about = "Search, view and bookmark recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes and show one page of results
    Search {
        query: String,
        /// Result page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a single recipe
    Show {
        id: String,
        /// Rescale the ingredient list to this many servings
        #[arg(long)]
        servings: Option<u32>,
    },
    /// Toggle the bookmark for a recipe
    Bookmark { id: String },
    /// List saved recipes
    Bookmarks,
    /// Upload a new recipe (requires an API key)
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        publisher: String,
        #[arg(long)]
        source_url: String,
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        servings: String,
        #[arg(long)]
        cooking_time: String,
        /// Ingredient as "quantity,unit,description"; repeatable
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Interactive session
    Shell,
}

/// Prints each frame as it arrives.
struct TermPresenter;

impl Presenter for TermPresenter {
    fn present(&mut self, _region: Region, markup: &str) {
        if markup.is_empty() {
            return;
        }
        println!("{markup}\n");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    let api = HttpRecipeApi::new(&settings)?;
    let store = JsonFileStore::new(&settings.bookmarks_path);
    let app = App::new(Box::new(api), Box::new(store), &settings)?;
    let mut controller = Controller::new(app, TermPresenter, &settings);

    match cli.command {
        Commands::Search { query, page } => {
            controller.dispatch(Event::Search { query }).await;
            if page > 1 {
                controller.dispatch(Event::GoToPage { page }).await;
            }
        }
        Commands::Show { id, servings } => {
            controller.dispatch(Event::OpenRecipe { id }).await;
            if let Some(servings) = servings {
                controller.dispatch(Event::SetServings { servings }).await;
            }
        }
        Commands::Bookmark { id } => {
            controller.dispatch(Event::OpenRecipe { id }).await;
            controller.dispatch(Event::ToggleBookmark).await;
        }
        Commands::Bookmarks => {
            controller.dispatch(Event::ShowBookmarks).await;
        }
        Commands::Submit {
            title,
            publisher,
            source_url,
            image_url,
            servings,
            cooking_time,
            ingredients,
        } => {
            let mut form = vec![
                ("title".to_string(), title),
                ("publisher".to_string(), publisher),
                ("source_url".to_string(), source_url),
                ("image_url".to_string(), image_url),
                ("servings".to_string(), servings),
                ("cooking_time".to_string(), cooking_time),
            ];
            for (index, ingredient) in ingredients.into_iter().enumerate() {
                form.push((format!("ingredient-{}", index + 1), ingredient));
            }
            controller.dispatch(Event::SubmitRecipe { form }).await;
        }
        Commands::Shell => shell(&mut controller).await?,
    }

    Ok(())
}

async fn shell(controller: &mut Controller<TermPresenter>) -> Result<()> {
    println!("Welcome to the app!");
    println!("Commands: search <query> | page <n|next|prev> | open <id> | servings <n> | bookmark | bookmarks | quit");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match parse_command(input, controller.app().state.search.current_page) {
            Some(event) => controller.dispatch(event).await,
            None => println!("Unrecognized command: {input}"),
        }
    }

    Ok(())
}

/// Translate a shell line into an event, the way the browser UI turns
/// clicks and hash changes into handler calls.
fn parse_command(input: &str, current_page: usize) -> Option<Event> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "search" if !rest.is_empty() => Some(Event::Search {
            query: rest.to_string(),
        }),
        "open" if !rest.is_empty() => Some(Event::OpenRecipe {
            id: rest.to_string(),
        }),
        "page" => {
            let page = match rest {
                "next" => current_page + 1,
                "prev" => current_page.saturating_sub(1).max(1),
                other => other.parse().ok()?,
            };
            Some(Event::GoToPage { page })
        }
        "servings" => Some(Event::SetServings {
            servings: rest.parse().ok()?,
        }),
        "bookmark" => Some(Event::ToggleBookmark),
        "bookmarks" => Some(Event::ShowBookmarks),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_keeps_spaces() {
        match parse_command("search  pizza margherita", 1) {
            Some(Event::Search { query }) => assert_eq!(query, "pizza margherita"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_page_next_and_prev() {
        match parse_command("page next", 2) {
            Some(Event::GoToPage { page }) => assert_eq!(page, 3),
            other => panic!("unexpected event: {other:?}"),
        }
        match parse_command("page prev", 1) {
            Some(Event::GoToPage { page }) => assert_eq!(page, 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_command("sing", 1).is_none());
        assert!(parse_command("servings four", 1).is_none());
        assert!(parse_command("search", 1).is_none());
    }
}
