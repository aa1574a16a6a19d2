//! Main menu loop.

use crate::domain::BookStore;
use crate::presentation::{Interface, Screen, StatusMessage};
use std::io;
use tracing::{debug, info};

/// Top-level menu entries, selected by the keys `1` to `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    DeleteBook,
    SearchBooks,
    ShowAllBooks,
    ChangeStatus,
    Exit,
}

impl MenuChoice {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::DeleteBook),
            "3" => Some(MenuChoice::SearchBooks),
            "4" => Some(MenuChoice::ShowAllBooks),
            "5" => Some(MenuChoice::ChangeStatus),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs menu iterations until the user picks Exit.
///
/// The outcome of a mutating flow is shown under the menu on the next
/// iteration only. I/O errors from the screen end the loop.
pub fn run_application<S: Screen, B: BookStore>(interface: &mut Interface<S, B>) -> io::Result<()> {
    let mut status_message: Option<StatusMessage> = None;

    loop {
        interface.show_main_menu(status_message.as_ref())?;
        let key = interface.get_value()?;
        status_message = None;

        let Some(choice) = MenuChoice::from_key(&key) else {
            continue;
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddBook => status_message = Some(interface.add_book()?),
            MenuChoice::DeleteBook => status_message = Some(interface.delete_book_by_id()?),
            MenuChoice::SearchBooks => interface.show_books_search()?,
            MenuChoice::ShowAllBooks => interface.show_all_books()?,
            MenuChoice::ChangeStatus => status_message = Some(interface.change_book_status()?),
            MenuChoice::Exit => {
                info!("exit requested");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookStatus, CatalogManager};
    use crate::infrastructure::JsonFileStore;
    use crate::presentation::PlainScreen;
    use std::io::Cursor;
    use tempfile::TempDir;

    type PlainInterface = Interface<PlainScreen<Cursor<Vec<u8>>, Vec<u8>>, JsonFileStore>;

    fn session(dir: &TempDir, script: &str) -> PlainInterface {
        let screen = PlainScreen::new(Cursor::new(script.as_bytes().to_vec()), Vec::<u8>::new())
            .without_clearing();
        let store = JsonFileStore::new(dir.path().join("books.json"));
        Interface::new(screen, CatalogManager::new(store))
    }

    fn output(interface: &PlainInterface) -> String {
        String::from_utf8(interface.screen().writer().clone()).unwrap()
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(MenuChoice::from_key("1"), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::from_key("5"), Some(MenuChoice::ChangeStatus));
        assert_eq!(MenuChoice::from_key("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_key("0"), None);
        assert_eq!(MenuChoice::from_key("add"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let mut interface = session(&dir, "6\n");

        run_application(&mut interface).unwrap();
        assert!(output(&interface).contains("6. Exit"));
    }

    #[test]
    fn test_add_then_lend() {
        let dir = TempDir::new().unwrap();
        let mut interface = session(&dir, "1\nWar and Peace\nTolstoy\n1869\n1\n5\n1\n1\n6\n");

        run_application(&mut interface).unwrap();

        let book = interface.catalog().get_book_by_id(1).unwrap();
        assert_eq!(book.status, BookStatus::Lent);

        let out = output(&interface);
        assert!(out.contains("Book added successfully"));
        assert!(out.contains("Status changed successfully"));
    }

    #[test]
    fn test_status_message_shown_once() {
        let dir = TempDir::new().unwrap();
        let mut interface = session(&dir, "2\nx\n9\n6\n");

        run_application(&mut interface).unwrap();

        assert_eq!(output(&interface).matches("Error: invalid ID").count(), 1);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let dir = TempDir::new().unwrap();
        let mut interface = session(&dir, "4\n3\n");

        let err = run_application(&mut interface).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
