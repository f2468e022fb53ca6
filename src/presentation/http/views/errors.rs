use super::{PageContext, layout::page};
use axum::http::StatusCode;
use maud::{Markup, html};

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let ctx = PageContext {
        user: None,
        flashes: &[],
    };
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        &ctx,
        title,
        html! {
            p { (message) }
            p { a href="/" { "Back to the front page" } }
        },
    )
}
