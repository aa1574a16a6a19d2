use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a book inside the catalog. Always positive.
pub type BookId = u64;

/// Lending state of a book.
///
/// Serialized as `"available"` / `"lent"`. Files written by earlier
/// versions of the catalog used Russian labels, which are still accepted
/// when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[serde(alias = "в наличии")]
    Available,
    #[serde(alias = "выдана")]
    Lent,
}

impl BookStatus {
    /// Returns the other of the two states.
    pub fn toggled(self) -> Self {
        match self {
            BookStatus::Available => BookStatus::Lent,
            BookStatus::Lent => BookStatus::Available,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Lent => "lent",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog record.
///
/// Field order matches the order written to the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: u32,
    pub status: BookStatus,
}

impl Book {
    /// Creates an available book, trimming surrounding whitespace from
    /// the title and author.
    pub fn new(id: BookId, title: &str, author: &str, year: u32) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year,
            status: BookStatus::Available,
        }
    }

    /// Case-insensitive match used by catalog search.
    ///
    /// `needle` must already be trimmed and lowercased. The title and author
    /// are matched by substring, the year only by its exact decimal form.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.year.to_string() == needle
    }

    /// One-line summary used by the listing screens.
    pub fn summary(&self) -> String {
        format!(
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
