pub mod cookbook;
pub mod security;

pub use cookbook::InMemoryCookbook;
pub use security::{FixedClock, PlainPasswordHasher, TEST_COOKIE_KEY};
