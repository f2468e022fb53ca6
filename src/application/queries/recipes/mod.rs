mod detail;
mod list;
mod service;

pub use list::ListRecipesQuery;
pub use service::RecipeQueryService;
