use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

/// Failures reported by catalog operations.
///
/// Every variant is recoverable: the shell prints the message and reads the
/// next command.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogError {
    /// Wrong number of arguments for the command
    #[error("Illegal parameter")]
    IllegalParameter,
    /// `list` on a catalog without books
    #[error("This library currently doesn't have any books")]
    EmptyCatalog,
    /// No book is stored under the requested code
    #[error("Book not found")]
    NotFound,
    /// `add` with a code that is already taken
    #[error("Failed to add book! Book code already exists")]
    DuplicateCode,
    /// `rent` on a book that is already rented
    #[error("Failed to rent book! {name} is already rented")]
    AlreadyRented {
        /// Name of the book, for the message
        name: String,
    },
    /// `return` on a book that is not rented
    #[error("Failed to return book! {name} is not rented")]
    NotRented {
        /// Name of the book, for the message
        name: String,
    },
    /// `rented` while every book is on the shelf
    #[error("Currently no books are rented")]
    NoneRented,
}
