use serde::Serialize;
use tracing::debug;

use crate::{
    catalog::{Catalog, ListEntry},
    error::CatalogError,
};

/// Commands understood by the shell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show every book
    List,
    /// Show the name of one book
    Get,
    /// Add a new book
    Add,
    /// Rent a book out
    Rent,
    /// Take a rented book back
    Return,
    /// Show the rented books
    Rented,
    /// Leave the shell
    Exit,
    /// Anything else, kept verbatim
    Unknown(String),
}

impl Command {
    /// Resolve a command name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "list" => Self::List,
            "get" => Self::Get,
            "add" => Self::Add,
            "rent" => Self::Rent,
            "return" => Self::Return,
            "rented" => Self::Rented,
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Result of running one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// Every book in the catalog
    Listing(Vec<ListEntry>),
    /// Name returned by `get`
    BookName(String),
    /// `add` succeeded
    Added,
    /// `rent` succeeded for the named book
    Rented(String),
    /// `return` succeeded for the named book
    Returned(String),
    /// The rented books
    RentedListing(Vec<ListEntry>),
    /// The user asked to leave
    Exit,
    /// The command name was not recognised
    UnknownCommand(String),
    /// The command was recognised but failed
    Failed(CatalogError),
}

/// Trim the line and collapse every interior whitespace run into one space
#[must_use]
pub fn normalize(line: &str) -> String {
    tokenize(line).join(" ")
}

/// Split a line into whitespace-separated tokens
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse `line` and run it against `catalog`
pub fn dispatch(catalog: &mut Catalog, line: &str) -> Outcome {
    let tokens = tokenize(line);
    let (name, args) = tokens.split_first().map_or(("", &[][..]), |(name, args)| (*name, args));
    let command = Command::from_name(name);
    debug!(?command, args = args.len(), "dispatching");

    let result = match command {
        Command::List => catalog.list(args).map(Outcome::Listing),
        Command::Get => catalog.get(args).map(|name| Outcome::BookName(name.to_string())),
        Command::Add => catalog.add(args).map(|()| Outcome::Added),
        Command::Rent => catalog.rent(args).map(Outcome::Rented),
        Command::Return => catalog.return_book(args).map(Outcome::Returned),
        Command::Rented => catalog.rented(args).map(Outcome::RentedListing),
        Command::Exit => Ok(Outcome::Exit),
        Command::Unknown(name) => Ok(Outcome::UnknownCommand(name)),
    };

    result.unwrap_or_else(Outcome::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  add\t 001   Dune \u{3000}Messiah  "), "add 001 Dune Messiah");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_command_names_are_case_sensitive() {
        assert_eq!(Command::from_name("return"), Command::Return);
        assert_eq!(Command::from_name("LIST"), Command::Unknown("LIST".to_string()));
        assert_eq!(Command::from_name(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_dispatch_scenario() {
        let mut catalog = Catalog::new();

        assert_eq!(dispatch(&mut catalog, "add 001 Dune"), Outcome::Added);
        assert_eq!(dispatch(&mut catalog, "  get   001 "), Outcome::BookName("Dune".to_string()));
        assert_eq!(dispatch(&mut catalog, "rent 001"), Outcome::Rented("Dune".to_string()));
        assert_eq!(
            dispatch(&mut catalog, "rent 001"),
            Outcome::Failed(CatalogError::AlreadyRented { name: "Dune".to_string() })
        );
        assert_eq!(dispatch(&mut catalog, "return 001"), Outcome::Returned("Dune".to_string()));
        assert_eq!(
            dispatch(&mut catalog, "return 001"),
            Outcome::Failed(CatalogError::NotRented { name: "Dune".to_string() })
        );
    }

    #[test]
    fn test_dispatch_unknown_and_exit() {
        let mut catalog = Catalog::new();

        assert_eq!(dispatch(&mut catalog, "borrow 001"), Outcome::UnknownCommand("borrow".into()));
        assert_eq!(dispatch(&mut catalog, ""), Outcome::UnknownCommand(String::new()));
        assert_eq!(dispatch(&mut catalog, "exit now"), Outcome::Exit);
    }

    #[test]
    fn test_dispatch_reports_failures() {
        let mut catalog = Catalog::new();

        assert_eq!(dispatch(&mut catalog, "list"), Outcome::Failed(CatalogError::EmptyCatalog));
        assert_eq!(dispatch(&mut catalog, "get"), Outcome::Failed(CatalogError::IllegalParameter));
        assert_eq!(dispatch(&mut catalog, "rented"), Outcome::Failed(CatalogError::NoneRented));
    }
}
