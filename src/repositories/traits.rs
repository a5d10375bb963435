use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for loading and saving the whole address book.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the stored book. A store that has never been written yields an
    /// empty book, not an error.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
