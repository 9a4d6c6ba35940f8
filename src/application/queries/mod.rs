pub mod books;
pub mod categories;
pub mod favorites;
pub mod users;
