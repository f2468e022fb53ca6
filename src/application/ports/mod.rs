pub mod security;
pub mod sessions;
pub mod util;
