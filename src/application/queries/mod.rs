pub mod articles;
pub mod recipes;
