use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, BookStatus},
    error::{CatalogError, Result},
    events::CatalogEvent,
    observers::CatalogObserver,
};

/// One numbered line of a `list` or `rented` listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListEntry {
    /// 1-based position in the listing
    pub index: usize,
    /// Code of the book
    pub code: String,
    /// Name of the book
    pub name: String,
    /// Status at the time of listing
    pub status: BookStatus,
}

/// In-memory book catalog and the command processor working on it.
///
/// Books are kept in ascending code order, which is also the order of every
/// listing. Operations take the tokens that followed the command name and
/// validate them in a fixed order: arity first, then existence, then the
/// rental state of the book. A failed operation leaves the catalog untouched.
#[derive(Default)]
pub struct Catalog {
    /// Book records keyed by code
    books: BTreeMap<String, Book>,
    /// Registered change observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

/// Reject any argument that is not an empty token
fn no_args(args: &[&str]) -> Result<()> {
    if args.iter().all(|arg| arg.is_empty()) { Ok(()) } else { Err(CatalogError::IllegalParameter) }
}

/// Extract the single code argument, ignoring trailing empty tokens
fn single_code<'a>(args: &[&'a str]) -> Result<&'a str> {
    match args {
        [code, rest @ ..] if rest.iter().all(|arg| arg.is_empty()) => Ok(*code),
        _ => Err(CatalogError::IllegalParameter),
    }
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer to be notified of catalog changes
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by code
    #[must_use]
    pub fn book(&self, code: &str) -> Option<&Book> {
        self.books.get(code)
    }

    /// Iterate over `(code, book)` pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Book)> {
        self.books.iter().map(|(code, book)| (code.as_str(), book))
    }

    /// List every book, numbered from 1 in code order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` if any argument is given and
    /// `CatalogError::EmptyCatalog` if there are no books.
    pub fn list(&self, args: &[&str]) -> Result<Vec<ListEntry>> {
        no_args(args)?;
        if self.books.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(numbered(self.iter()))
    }

    /// Get the name of the book stored under a code
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` unless exactly one code is
    /// given and `CatalogError::NotFound` if the code is unknown.
    pub fn get(&self, args: &[&str]) -> Result<&str> {
        let code = single_code(args)?;
        self.books.get(code).map(|book| book.name.as_str()).ok_or(CatalogError::NotFound)
    }

    /// Add an available book; the name is every token after the code joined
    /// by single spaces
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` if the code or the name is
    /// missing and `CatalogError::DuplicateCode` if the code is taken.
    pub fn add(&mut self, args: &[&str]) -> Result<()> {
        let [code, name @ ..] = args else {
            return Err(CatalogError::IllegalParameter);
        };
        if name.is_empty() {
            return Err(CatalogError::IllegalParameter);
        }

        match self.books.entry((*code).to_string()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateCode),
            Entry::Vacant(slot) => {
                let book = slot.insert(Book::new(name.join(" ")));
                for observer in &self.observers {
                    observer.on_change(code, book, CatalogEvent::Added);
                }
                Ok(())
            }
        }
    }

    /// Mark a book as rented and return its name
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` unless exactly one code is
    /// given, `CatalogError::NotFound` if the code is unknown and
    /// `CatalogError::AlreadyRented` if the book is out already.
    pub fn rent(&mut self, args: &[&str]) -> Result<String> {
        let code = single_code(args)?;
        self.transition(code, BookStatus::Rented)
    }

    /// Mark a rented book as available again and return its name
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` unless exactly one code is
    /// given, `CatalogError::NotFound` if the code is unknown and
    /// `CatalogError::NotRented` if the book is on the shelf.
    pub fn return_book(&mut self, args: &[&str]) -> Result<String> {
        let code = single_code(args)?;
        self.transition(code, BookStatus::Available)
    }

    /// List the rented books, numbered from 1 in code order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IllegalParameter` if any argument is given and
    /// `CatalogError::NoneRented` if no book is rented.
    pub fn rented(&self, args: &[&str]) -> Result<Vec<ListEntry>> {
        no_args(args)?;
        let entries = numbered(self.iter().filter(|(_, book)| book.is_rented()));
        if entries.is_empty() {
            return Err(CatalogError::NoneRented);
        }
        Ok(entries)
    }

    /// Flip the status of an existing book to `to`
    fn transition(&mut self, code: &str, to: BookStatus) -> Result<String> {
        let book = self.books.get_mut(code).ok_or(CatalogError::NotFound)?;

        match (book.status, to) {
            (BookStatus::Rented, BookStatus::Rented) => {
                return Err(CatalogError::AlreadyRented { name: book.name.clone() });
            }
            (BookStatus::Available, BookStatus::Available) => {
                return Err(CatalogError::NotRented { name: book.name.clone() });
            }
            _ => book.status = to,
        }

        let event = match to {
            BookStatus::Rented => CatalogEvent::Rented,
            BookStatus::Available => CatalogEvent::Returned,
        };
        for observer in &self.observers {
            observer.on_change(code, book, event);
        }

        Ok(book.name.clone())
    }
}

/// Number listing lines from 1
fn numbered<'a>(books: impl Iterator<Item = (&'a str, &'a Book)>) -> Vec<ListEntry> {
    (1..)
        .zip(books)
        .map(|(index, (code, book))| ListEntry {
            index,
            code: code.to_string(),
            name: book.name.clone(),
            status: book.status,
        })
        .collect()
}
