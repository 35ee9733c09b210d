use std::str::FromStr;

use crate::{
    error::AppError,
    models::SortOption,
    view::controller::CatalogController,
};

pub const HELP: &str = "\
Commands:
  search <text>        search movies by name (empty text clears the search)
  genre <name>         select or deselect a genre
  genres               list available genres
  sort rating|year|name
  next | prev          move between pages
  page <n>             jump to a page
  show                 print the current page again
  help                 this message
  quit";

/// A line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    ToggleGenre(String),
    ListGenres,
    Sort(SortOption),
    NextPage,
    PreviousPage,
    Page(u32),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "genre" | "g" => {
                if rest.is_empty() {
                    return Err(AppError::InvalidInput("genre needs a name".to_string()));
                }
                Ok(Command::ToggleGenre(rest.to_string()))
            }
            "genres" => Ok(Command::ListGenres),
            "sort" => Ok(Command::Sort(rest.parse()?)),
            "next" | "n" => Ok(Command::NextPage),
            "prev" | "p" => Ok(Command::PreviousPage),
            "page" => rest
                .parse::<u32>()
                .map(Command::Page)
                .map_err(|_| AppError::InvalidInput(format!("'{}' is not a page number", rest))),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(AppError::InvalidInput(format!(
                "Unknown command '{}', type 'help'",
                other
            ))),
        }
    }
}

impl Command {
    /// Runs the command against the controller; returns whether state changed
    pub async fn apply(&self, controller: &CatalogController) -> bool {
        match self {
            Command::Search(text) => controller.search(text).await,
            Command::ToggleGenre(name) => {
                let state = controller.snapshot().await;
                if !state.query.is_selected(name) && !state.genres.iter().any(|g| g.name == *name) {
                    tracing::warn!(genre = %name, "Genre not in the fetched list");
                }
                controller.toggle_genre(name).await
            }
            Command::Sort(option) => controller.change_sort(*option).await,
            Command::NextPage => controller.next_page().await,
            Command::PreviousPage => controller.previous_page().await,
            Command::Page(page) => controller.set_page(*page).await,
            Command::ListGenres | Command::Show | Command::Help | Command::Quit => false,
        }
    }
}
