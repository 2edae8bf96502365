use serde::{Deserialize, Serialize};

/// Rental status of a single book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// Book is on the shelf and can be rented
    #[default]
    Available,
    /// Book is currently rented out
    Rented,
}

impl BookStatus {
    /// Marker appended to a listing line, empty for available books
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Available => "",
            Self::Rented => "(Rented)",
        }
    }
}

/// A book record stored in the catalog under its code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Display name, may contain spaces
    pub name: String,
    /// Current rental status
    pub status: BookStatus,
}

impl Book {
    /// Create an available book with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), status: BookStatus::Available }
    }

    #[must_use]
    pub fn is_rented(&self) -> bool {
        self.status == BookStatus::Rented
    }
}
