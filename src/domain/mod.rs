pub mod book;
pub mod category;
pub mod errors;
pub mod favorite;
pub mod slug;
pub mod user;
