pub mod books;
pub mod categories;
pub mod favorites;
pub mod pagination;
pub mod users;

pub use books::BookDto;
pub use categories::CategoryDto;
pub use favorites::{FavoriteDto, UnfavoriteDto};
pub use pagination::Page;
pub use users::{AuthenticatedUser, RegisteredUserDto, UserDto};
