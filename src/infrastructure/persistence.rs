use crate::domain::{Book, BookStore, CatalogError, CatalogResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores the catalog as a pretty-printed JSON array in a single file.
///
/// The file is opened, fully read or written, and closed within each call.
/// Saves go through a temporary file in the same directory that is then
/// renamed over the target, so an interrupted save never truncates it.
/// The replaced file keeps its permissions, and a symlinked data file is
/// updated through the link.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn to_json(books: &[Book]) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        books.serialize(&mut serializer)?;
        Ok(buffer)
    }

    /// File the save replaces: the symlink target when the data file is a
    /// link, otherwise the configured path.
    fn save_target(&self) -> PathBuf {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(_) => self.path.clone(),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> CatalogResult<Vec<Book>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(CatalogError::persistence(&self.path, e)),
        };

        let books: Vec<Book> = serde_json::from_str(&content)
            .map_err(|e| CatalogError::persistence(&self.path, format!("invalid file format - {}", e)))?;
        debug!(path = %self.path.display(), count = books.len(), "catalog loaded");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let json = Self::to_json(books)
            .map_err(|e| CatalogError::persistence(&self.path, format!("serialization failed: {}", e)))?;

        let target = self.save_target();
        let mut file = NamedTempFile::new_in(parent_dir(&target))
            .map_err(|e| CatalogError::persistence(&self.path, e))?;
        if let Ok(metadata) = fs::metadata(&target) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| CatalogError::persistence(&self.path, e))?;
        }
        file.write_all(&json)
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| CatalogError::persistence(&self.path, e))?;
        file.persist(&target)
            .map_err(|e| CatalogError::persistence(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = books.len(), "catalog saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookStatus;
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        let mut lent = Book::new(2, "Война и мир", "Толстой", 1869);
        lent.status = BookStatus::Lent;
        vec![Book::new(1, "Book 1", "Author", 2001), lent]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));
        let books = sample_books();

        store.save(&books).unwrap();
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        store.save(&[]).unwrap();
        assert!(store.path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_saved_file_is_indented_and_unescaped() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        store.save(&sample_books()).unwrap();

        let content = fs::read_to_string(&store.path).unwrap();
        assert!(content.contains("Война и мир"));
        assert!(!content.contains("\\u"));
        assert!(content.contains("\n    {\n        \"id\": 1,"));
        assert!(content.contains("\"status\": \"lent\""));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        store.save(&sample_books()).unwrap();
        store.save(&sample_books()[..1]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_file_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(CatalogError::Persistence { .. })));
    }

    #[test]
    fn test_unwritable_path_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("books.json"));

        let result = store.save(&sample_books());
        assert!(matches!(result, Err(CatalogError::Persistence { .. })));
    }

    #[test]
    fn test_loads_legacy_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[
    {
        "id": 1,
        "title": "Мастер и Маргарита",
        "author": "Булгаков",
        "year": 1967,
        "status": "выдана"
    }
]"#,
        )
        .unwrap();

        let books = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].status, BookStatus::Lent);
        assert_eq!(books[0].author, "Булгаков");
    }

    #[test]
    fn test_relative_path_uses_current_dir_for_temp_file() {
        assert_eq!(parent_dir(Path::new("books.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("data/books.json")), Path::new("data"));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        JsonFileStore::new(&path).save(&sample_books()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("books.json");
        fs::write(&real, "[]").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store = JsonFileStore::new(&link);
        store.save(&sample_books()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(JsonFileStore::new(&real).load().unwrap(), sample_books());
    }
}
