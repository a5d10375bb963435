use crate::error::StorageResult;
use crate::models::{AddressBook, Record};
use crate::repositories::traits::BookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk shape of the address book. `records` is in insertion order.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    #[serde(default)]
    records: Vec<Record>,
}

/// Book repository backed by a single pretty-printed JSON file.
///
/// The whole book is rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    /// Create a repository for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "Address book file not found, starting with an empty book"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: BookFile = serde_json::from_str(&contents)?;
        let book = AddressBook::from_records(file.records);

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = BookFile {
            records: book.iter().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
