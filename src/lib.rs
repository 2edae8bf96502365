//! In-memory library catalog driven by a line-oriented command shell.
//!
//! The [`Catalog`] stores book records by code and implements the
//! `list`, `get`, `add`, `rent`, `return` and `rented` commands. The
//! [`command`] module turns raw input lines into calls on the catalog and
//! the [`Shell`] wraps that in a read-dispatch-print loop.

pub mod book;
pub mod catalog;
pub mod cli;
pub mod command;
pub mod error;
pub mod events;
pub mod observers;
pub mod render;
pub mod shell;

pub use book::{Book, BookStatus};
pub use catalog::{Catalog, ListEntry};
pub use command::{Command, Outcome, dispatch};
pub use error::CatalogError;
pub use events::CatalogEvent;
pub use shell::{Shell, ShellConfig};
