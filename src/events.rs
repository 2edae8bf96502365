use serde::{Deserialize, Serialize};

/// Changes a catalog reports to its observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEvent {
    /// A new book was inserted
    Added,
    /// A book went from available to rented
    Rented,
    /// A rented book came back
    Returned,
}
