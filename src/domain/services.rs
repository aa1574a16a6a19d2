//! Catalog business rules.
//!
//! The [`CatalogManager`] owns id assignment, validation, search and status
//! changes. It never caches the collection: every call loads the full list
//! from its [`BookStore`], and mutating calls save the full list back.

use super::errors::{CatalogError, CatalogResult};
use super::models::{Book, BookId, BookStatus};
use tracing::{debug, info};

/// Whole-collection persistence used by the catalog.
pub trait BookStore {
    /// Loads every book in storage order. A missing backing store is an
    /// empty collection.
    fn load(&self) -> CatalogResult<Vec<Book>>;

    /// Replaces the stored collection with `books`.
    fn save(&self, books: &[Book]) -> CatalogResult<()>;
}

/// Parses user-supplied id text. Surrounding whitespace is ignored.
pub fn parse_book_id(text: &str) -> CatalogResult<BookId> {
    text.trim()
        .parse::<BookId>()
        .map_err(|_| CatalogError::Validation(format!("invalid book ID: '{}'", text.trim())))
}

/// Returns true when `text` is a non-empty run of ASCII digits.
pub fn is_valid_year(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(text: &str) -> CatalogResult<u32> {
    if !is_valid_year(text) {
        return Err(CatalogError::Validation("year must be a number".to_string()));
    }
    text.parse::<u32>()
        .map_err(|_| CatalogError::Validation(format!("year is out of range: {}", text)))
}

/// Catalog operations over a [`BookStore`].
///
/// # Examples
///
/// ```no_run
/// use bookshelf::domain::CatalogManager;
/// use bookshelf::infrastructure::JsonFileStore;
///
/// let catalog = CatalogManager::new(JsonFileStore::new("books.json"));
/// let book = catalog.add_book("Dune", "Frank Herbert", "1965")?;
/// assert_eq!(catalog.get_book_by_id(book.id)?.title, "Dune");
/// # Ok::<(), bookshelf::domain::CatalogError>(())
/// ```
pub struct CatalogManager<S> {
    store: S,
}

impl<S: BookStore> CatalogManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds a new available book and returns it.
    ///
    /// The id is one more than the highest id currently stored, or 1 for an
    /// empty catalog. Title and author are trimmed.
    ///
    /// # Errors
    ///
    /// `Validation` when `year` is not made only of decimal digits; nothing
    /// is written in that case.
    pub fn add_book(&self, title: &str, author: &str, year: &str) -> CatalogResult<Book> {
        let year = parse_year(year)?;

        let mut books = self.store.load()?;
        let id = next_id(&books);
        let book = Book::new(id, title, author, year);
        books.push(book.clone());
        self.store.save(&books)?;

        info!(id, title = %book.title, "book added");
        Ok(book)
    }

    pub fn get_book_by_id(&self, id: BookId) -> CatalogResult<Book> {
        self.store
            .load()?
            .into_iter()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Sets the status of the book with `id`, leaving every other field and
    /// record untouched.
    pub fn update_status_by_id(&self, id: BookId, new_status: BookStatus) -> CatalogResult<()> {
        let mut books = self.store.load()?;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        book.status = new_status;
        self.store.save(&books)?;

        info!(id, status = %new_status, "book status updated");
        Ok(())
    }

    pub fn delete_by_id(&self, id: BookId) -> CatalogResult<()> {
        let mut books = self.store.load()?;
        let before = books.len();
        books.retain(|book| book.id != id);
        if books.len() == before {
            return Err(CatalogError::NotFound(id));
        }
        self.store.save(&books)?;

        info!(id, "book deleted");
        Ok(())
    }

    /// Finds books whose title or author contains `query` (ignoring case),
    /// or whose year equals it. An empty query returns every book.
    pub fn search_by_value(&self, query: &str) -> CatalogResult<Vec<Book>> {
        let needle = query.trim().to_lowercase();
        let matches: Vec<Book> = self
            .store
            .load()?
            .into_iter()
            .filter(|book| book.matches(&needle))
            .collect();

        debug!(query = %needle, found = matches.len(), "search finished");
        Ok(matches)
    }

    pub fn get_all_books(&self) -> CatalogResult<Vec<Book>> {
        self.store.load()
    }
}

fn next_id(books: &[Book]) -> BookId {
    books.iter().map(|book| book.id).max().unwrap_or(0) + 1
}
