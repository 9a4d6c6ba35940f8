mod create;
mod delete;
mod service;
mod update;

pub use create::CreateBookCommand;
pub use delete::DeleteBookCommand;
pub use service::BookCommandService;
pub use update::UpdateBookCommand;
