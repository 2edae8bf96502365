use tracing::info;

use crate::{book::Book, events::CatalogEvent};

/// Trait for catalog change observation
pub trait CatalogObserver {
    /// Called after a successful mutation with the record as it is now
    fn on_change(&self, code: &str, book: &Book, event: CatalogEvent);
}

/// Logs every catalog change as a structured tracing event
#[derive(Debug)]
pub struct TransitionLogger;

impl CatalogObserver for TransitionLogger {
    fn on_change(&self, code: &str, book: &Book, event: CatalogEvent) {
        info!(code, name = %book.name, status = ?book.status, ?event, "catalog changed");
    }
}
