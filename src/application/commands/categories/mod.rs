mod create;
mod delete;
mod rename;
mod service;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use rename::RenameCategoryCommand;
pub use service::CategoryCommandService;
