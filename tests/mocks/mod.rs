//! Shared test doubles for integration tests.

mod mock_book_repository;

pub use mock_book_repository::MockBookRepository;
