pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{BOOK_INDEX_PATH, Book, BookUpdate, NewBook};
pub use repository::{BookReadRepository, BookWriteRepository};
pub use value_objects::BookId;
