// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;
pub mod util;

pub use security::SequentialTokenIssuer;
pub use store::{
    MemoryBookRepo, MemoryCategoryRepo, MemoryFavoriteRepo, MemoryStore, MemoryUserRepo,
};
pub use time::fixed_now;
pub use util::{DummyClock, SteppingClock};
