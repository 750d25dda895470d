//! Data models for the library API

pub mod author;
pub mod book;
pub mod borrowed;
pub mod member;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use borrowed::Borrowed;
pub use member::Member;
