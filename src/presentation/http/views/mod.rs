//! HTML templates.
//!
//! Every page is a function from already-loaded data to [`Markup`]. Views
//! never touch services; controllers fetch, views render.

pub mod articles;
pub mod auth;
pub mod errors;
pub mod layout;
pub mod recipes;
pub mod widgets;

use crate::application::dto::{AuthenticatedUser, FlashMessage};

/// Per-request data every page's chrome needs.
pub struct PageContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub flashes: &'a [FlashMessage],
}
