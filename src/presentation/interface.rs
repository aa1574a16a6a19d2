//! Menu flows shared by both front ends.
//!
//! [`Interface`] drives a [`Screen`] and a [`CatalogManager`]: it collects
//! input, applies the catalog operation and turns the outcome into a
//! [`StatusMessage`]. Nothing here knows which renderer is active.

use super::pagination::{PageCommand, Paginator};
use super::screen::{Screen, StatusMessage};
use crate::domain::{
    is_valid_year, parse_book_id, Book, BookStore, CatalogError, CatalogManager,
};
use std::io;
use tracing::warn;

pub const MENU_TITLE: &str = "Library management:";

pub const MENU_ITEMS: [&str; 6] = [
    "1. Add a book",
    "2. Delete a book",
    "3. Find a book",
    "4. Show all books",
    "5. Change book status",
    "6. Exit",
];

const INVALID_ID: &str = "Error: invalid ID";
const BOOK_NOT_FOUND: &str = "Book with this ID was not found";

/// Menu flows over one screen and one catalog.
pub struct Interface<S, B> {
    screen: S,
    catalog: CatalogManager<B>,
}

impl<S: Screen, B: BookStore> Interface<S, B> {
    /// Creates an interface drawing on `screen` and applying changes to
    /// `catalog`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::domain::CatalogManager;
    /// use bookshelf::infrastructure::JsonFileStore;
    /// use bookshelf::presentation::{Interface, PlainScreen};
    /// use std::io::Cursor;
    ///
    /// let screen = PlainScreen::new(Cursor::new(b"4\n".to_vec()), Vec::<u8>::new())
    ///     .without_clearing();
    /// let catalog = CatalogManager::new(JsonFileStore::new("books.json"));
    /// let mut interface = Interface::new(screen, catalog);
    ///
    /// interface.show_main_menu(None)?;
    /// assert_eq!(interface.get_value()?, "4");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(screen: S, catalog: CatalogManager<B>) -> Self {
        Self { screen, catalog }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn catalog(&self) -> &CatalogManager<B> {
        &self.catalog
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Shows the menu title and items, followed by `message` when a
    /// previous flow reported an outcome.
    pub fn show_main_menu(&mut self, message: Option<&StatusMessage>) -> io::Result<()> {
        self.screen.clear_screen()?;
        self.screen.add_text(MENU_TITLE)?;
        self.screen.add_text("")?;
        for item in MENU_ITEMS {
            self.screen.add_text(item)?;
        }

        if let Some(message) = message {
            self.screen.add_text("")?;
            self.screen.add_status(message)?;
        }
        Ok(())
    }

    /// Reads the top-level menu choice.
    pub fn get_value(&mut self) -> io::Result<String> {
        self.screen.read_key()
    }

    /// Collects a new book, asks for confirmation and saves it.
    ///
    /// The year prompt repeats until the input is made of digits only.
    ///
    /// # Errors
    ///
    /// Only screen I/O errors are returned. Catalog failures become an
    /// error [`StatusMessage`].
    pub fn add_book(&mut self) -> io::Result<StatusMessage> {
        let title = self.screen.prompt_line("Enter the book title:")?;
        let author = self.screen.prompt_line("Enter the book author:")?;
        let mut year = self.screen.prompt_line("Enter the publication year:")?;
        while !is_valid_year(&year) {
            year = self.screen.prompt_line("Enter a valid publication year:")?;
        }

        self.screen.clear_screen()?;
        self.screen.add_text("Book details:")?;
        self.screen.add_text("")?;
        self.screen.add_text(&format!("Title: {}", title))?;
        self.screen.add_text(&format!("Author: {}", author))?;
        self.screen.add_text(&format!("Year: {}", year))?;
        self.screen.add_text("")?;
        self.screen.add_text("1. Save the book")?;
        self.screen.add_text("2. Cancel")?;

        loop {
            match self.screen.read_key()?.trim() {
                "1" => {
                    return Ok(match self.catalog.add_book(&title, &author, &year) {
                        Ok(_) => StatusMessage::success("Book added successfully"),
                        Err(e) => failure_message(&e),
                    });
                }
                "2" => return Ok(StatusMessage::success("Adding the book was cancelled")),
                _ => {}
            }
        }
    }

    /// Prompts for an id and deletes that book.
    ///
    /// Input that is not an id yields "Error: invalid ID"; a well-formed id
    /// with no matching book yields "Book with this ID was not found". The
    /// catalog is left untouched in both cases.
    ///
    /// # Errors
    ///
    /// Only screen I/O errors are returned. Storage failures are reported
    /// in the returned message.
    pub fn delete_book_by_id(&mut self) -> io::Result<StatusMessage> {
        let input = self.screen.prompt_line("Enter the ID of the book to delete:")?;
        let Ok(id) = parse_book_id(&input) else {
            return Ok(StatusMessage::error(INVALID_ID));
        };

        Ok(match self.catalog.delete_by_id(id) {
            Ok(()) => StatusMessage::success("Book deleted successfully"),
            Err(e) => failure_message(&e),
        })
    }

    /// Looks a book up by id and offers to flip its status.
    pub fn change_book_status(&mut self) -> io::Result<StatusMessage> {
        let input = self
            .screen
            .prompt_line("Enter the ID of the book whose status should change:")?;
        let Ok(id) = parse_book_id(&input) else {
            return Ok(StatusMessage::error(INVALID_ID));
        };
        let book = match self.catalog.get_book_by_id(id) {
            Ok(book) => book,
            Err(e) => return Ok(failure_message(&e)),
        };

        let new_status = book.status.toggled();
        self.screen.clear_screen()?;
        self.screen.add_text(&format!("Book title: {}", book.title))?;
        self.screen.add_text(&format!("Book author: {}", book.author))?;
        self.screen.add_text(&format!("Current status: {}", book.status))?;
        self.screen.add_text("")?;
        self.screen.add_text(&format!("1. Change status to '{}'", new_status))?;
        self.screen.add_text("2. Cancel")?;

        loop {
            match self.screen.read_key()?.trim() {
                "1" => {
                    return Ok(match self.catalog.update_status_by_id(book.id, new_status) {
                        Ok(()) => StatusMessage::success("Status changed successfully"),
                        Err(e) => failure_message(&e),
                    });
                }
                "2" => return Ok(StatusMessage::success("Status change cancelled")),
                _ => {}
            }
        }
    }

    /// Pages through every book in storage order until the user goes back.
    ///
    /// A catalog that cannot be loaded is logged and shown as an empty
    /// listing.
    ///
    /// # Errors
    ///
    /// Returns screen I/O errors, including end of input.
    pub fn show_all_books(&mut self) -> io::Result<()> {
        let books = self.catalog.get_all_books().unwrap_or_else(|e| {
            warn!(error = %e, "listing books failed");
            Vec::new()
        });
        self.show_books_with_pagination(&books)
    }

    /// Prompts for a query and pages through the matching books.
    ///
    /// Matching ignores case and surrounding whitespace: a book matches on
    /// a title or author substring, or on its exact year. An empty query
    /// lists everything. Storage failures show an empty listing.
    ///
    /// # Errors
    ///
    /// Returns screen I/O errors, including end of input.
    pub fn show_books_search(&mut self) -> io::Result<()> {
        let query = self.screen.prompt_line("Enter a search string:")?;
        let books = self.catalog.search_by_value(&query).unwrap_or_else(|e| {
            warn!(error = %e, "search failed");
            Vec::new()
        });
        self.show_books_with_pagination(&books)
    }

    /// Paged listing; returns when the user asks to go back.
    fn show_books_with_pagination(&mut self, books: &[Book]) -> io::Result<()> {
        let mut pager = Paginator::new(books.len());

        loop {
            self.screen.clear_screen()?;
            self.screen.add_text(&pager.header())?;
            self.screen.add_text("")?;
            for book in &books[pager.page_range()] {
                self.screen.add_text(&book.summary())?;
            }
            self.screen.add_text("")?;
            self.screen.add_text("1. Next page")?;
            self.screen.add_text("2. Previous page")?;
            self.screen.add_text("3. Back to main menu")?;

            match PageCommand::from_key(&self.screen.read_key()?) {
                Some(PageCommand::Next) => {
                    pager.next();
                }
                Some(PageCommand::Previous) => {
                    pager.previous();
                }
                Some(PageCommand::Back) => return Ok(()),
                None => {}
            }
        }
    }
}

fn failure_message(error: &CatalogError) -> StatusMessage {
    match error {
        CatalogError::Validation(reason) => StatusMessage::error(format!("Error: {}", reason)),
        CatalogError::NotFound(_) => StatusMessage::error(BOOK_NOT_FOUND),
        CatalogError::Persistence { .. } => {
            warn!(error = %error, "catalog operation failed");
            StatusMessage::error(format!("Error: {}", error))
        }
    }
}
