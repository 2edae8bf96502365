use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::{catalog::ListEntry, command::Outcome, error::CatalogError};

/// How outcomes are written to the shell's output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

/// Envelope for a successful outcome in JSON mode
#[derive(Debug, Serialize)]
struct JsonOk<'a> {
    /// Always `true`
    ok: bool,
    /// The outcome itself
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Envelope for a failed command in JSON mode
#[derive(Debug, Serialize)]
struct JsonErr<'a> {
    /// Always `false`
    ok: bool,
    /// Machine-readable error
    error: &'a CatalogError,
    /// Same text the text mode prints
    message: String,
}

/// Text lines for an outcome, without colour
#[must_use]
pub fn text_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Listing(entries) => {
            let mut lines = vec!["List of Books ([code] - [name] [status]) :".to_string()];
            lines.extend(entries.iter().map(|entry| {
                let marker = entry.status.marker();
                if marker.is_empty() {
                    listing_line(entry)
                } else {
                    format!("{} {marker}", listing_line(entry))
                }
            }));
            lines
        }
        Outcome::RentedListing(entries) => {
            let mut lines = vec!["List of Rented Books ([code] - [name]) :".to_string()];
            lines.extend(entries.iter().map(listing_line));
            lines
        }
        Outcome::BookName(name) => vec![format!("Book name : {name}")],
        Outcome::Added => vec!["Book added!".to_string()],
        Outcome::Rented(name) => vec![format!("{name} rented")],
        Outcome::Returned(name) => vec![format!("{name} returned")],
        Outcome::UnknownCommand(_) => vec!["Command not found!".to_string()],
        Outcome::Failed(err) => vec![err.to_string()],
        Outcome::Exit => Vec::new(),
    }
}

/// `N. code - name`
fn listing_line(entry: &ListEntry) -> String {
    format!("{}. {} - {}", entry.index, entry.code, entry.name)
}

/// Write an outcome as text, colouring confirmations and failures when asked
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_text(out: &mut impl Write, outcome: &Outcome, color: bool) -> io::Result<()> {
    for line in text_lines(outcome) {
        if !color {
            writeln!(out, "{line}")?;
            continue;
        }
        match outcome {
            Outcome::Failed(_) | Outcome::UnknownCommand(_) => writeln!(out, "{}", line.red())?,
            Outcome::Added | Outcome::Rented(_) | Outcome::Returned(_) => {
                writeln!(out, "{}", line.green())?;
            }
            _ => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}

/// Write an outcome as a single JSON line; `Exit` writes nothing
///
/// # Errors
///
/// Returns any error raised by the writer or by serialization.
pub fn write_json(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    let line = match outcome {
        Outcome::Exit => return Ok(()),
        Outcome::Failed(error) => {
            serde_json::to_string(&JsonErr { ok: false, error, message: error.to_string() })?
        }
        other => serde_json::to_string(&JsonOk { ok: true, outcome: other })?,
    };
    writeln!(out, "{line}")
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::book::BookStatus;

    fn entry(index: usize, code: &str, name: &str, status: BookStatus) -> ListEntry {
        ListEntry { index, code: code.to_string(), name: name.to_string(), status }
    }

    #[test]
    fn test_listing_marks_rented_books() {
        let outcome = Outcome::Listing(vec![
            entry(1, "001", "Dune", BookStatus::Available),
            entry(2, "002", "Dune Messiah", BookStatus::Rented),
        ]);

        assert_eq!(
            text_lines(&outcome),
            vec![
                "List of Books ([code] - [name] [status]) :",
                "1. 001 - Dune",
                "2. 002 - Dune Messiah (Rented)",
            ]
        );
    }

    #[test]
    fn test_failure_text_carries_book_name() {
        let outcome = Outcome::Failed(CatalogError::AlreadyRented { name: "Dune".to_string() });
        assert_eq!(text_lines(&outcome), vec!["Failed to rent book! Dune is already rented"]);
    }

    #[test]
    fn test_plain_text_has_no_escape_codes() {
        let mut out = Vec::new();
        assert!(write_text(&mut out, &Outcome::Rented("Dune".to_string()), false).is_ok());
        assert_eq!(String::from_utf8_lossy(&out), "Dune rented\n");
    }

    #[test]
    fn test_exit_renders_nothing() {
        let mut out = Vec::new();
        assert!(write_text(&mut out, &Outcome::Exit, false).is_ok());
        assert!(write_json(&mut out, &Outcome::Exit).is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_success_and_failure() {
        let mut out = Vec::new();
        assert!(write_json(&mut out, &Outcome::BookName("Dune".to_string())).is_ok());
        assert!(
            write_json(&mut out, &Outcome::Failed(CatalogError::NotRented { name: "Dune".into() }))
                .is_ok()
        );

        let text = String::from_utf8_lossy(&out);
        let docs: Vec<Value> =
            text.lines().filter_map(|line| serde_json::from_str(line).ok()).collect();
        assert_eq!(docs.len(), 2);

        assert_eq!(
            docs.first(),
            Some(&serde_json::json!({ "ok": true, "outcome": "book_name", "data": "Dune" }))
        );
        assert_eq!(
            docs.get(1),
            Some(&serde_json::json!({
                "ok": false,
                "error": { "kind": "not_rented", "name": "Dune" },
                "message": "Failed to return book! Dune is not rented",
            }))
        );
    }
}
