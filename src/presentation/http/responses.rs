//! Response helpers shared by the HTML controllers.
use crate::application::dto::FlashMessage;
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::RequestContext,
    state::HttpState,
    views::PageContext,
};
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use maud::Markup;

pub const LOGIN_PATH: &str = "/auth/login/";
pub const LOGIN_REQUIRED: &str = "You should login first.";

/// Renders a full page, consuming the session's pending flashes.
pub async fn render(
    state: &HttpState,
    ctx: &RequestContext,
    view: impl FnOnce(&PageContext<'_>) -> Markup,
) -> HttpResult<Response> {
    render_with_status(state, ctx, StatusCode::OK, view).await
}

pub async fn render_with_status(
    state: &HttpState,
    ctx: &RequestContext,
    status: StatusCode,
    view: impl FnOnce(&PageContext<'_>) -> Markup,
) -> HttpResult<Response> {
    let flashes = state
        .services
        .sessions
        .take_flashes(ctx.session_id)
        .await
        .into_http()?;
    let page = PageContext {
        user: ctx.user(),
        flashes: &flashes,
    };
    Ok((status, Html(view(&page).into_string())).into_response())
}

pub async fn redirect_with_flash(
    state: &HttpState,
    ctx: &RequestContext,
    message: FlashMessage,
    to: &str,
) -> HttpResult<Response> {
    state
        .services
        .sessions
        .flash(ctx.session_id, message)
        .await
        .into_http()?;
    Ok(Redirect::to(to).into_response())
}

/// Sends an anonymous visitor to the login page, remembering `uri` as `next`.
pub async fn login_redirect(
    state: &HttpState,
    ctx: &RequestContext,
    uri: &Uri,
) -> HttpResult<Response> {
    let next = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    redirect_with_flash(
        state,
        ctx,
        FlashMessage::info(LOGIN_REQUIRED),
        &login_url(next),
    )
    .await
}

pub fn login_url(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(_) => LOGIN_PATH.to_owned(),
    }
}

/// Accepts only same-site absolute paths as post-login targets.
pub fn local_next(next: Option<&str>) -> Option<&str> {
    next.filter(|target| {
        target.starts_with('/')
            && !target.starts_with("//")
            && !target.starts_with("/\\")
            && !target.chars().any(char::is_control)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_encodes_next() {
        assert_eq!(
            login_url("/recipe/create/"),
            "/auth/login/?next=%2Frecipe%2Fcreate%2F"
        );
        assert_eq!(
            login_url("/recipe/?tag=a b"),
            "/auth/login/?next=%2Frecipe%2F%3Ftag%3Da+b"
        );
    }

    #[test]
    fn only_local_paths_are_followed() {
        assert_eq!(local_next(Some("/recipe/my/")), Some("/recipe/my/"));
        assert_eq!(local_next(Some("//evil.example")), None);
        assert_eq!(local_next(Some("/\\evil.example")), None);
        assert_eq!(local_next(Some("https://evil.example/")), None);
        assert_eq!(local_next(None), None);
    }
}
