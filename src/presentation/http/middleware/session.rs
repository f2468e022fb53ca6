// src/presentation/http/middleware/session.rs
use crate::application::ports::sessions::SessionId;
use crate::presentation::http::{
    error::HttpError, extractors::RequestContext, state::HttpState,
};
use axum::{
    Extension,
    body::Body,
    http::{HeaderValue, Request, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Cookie, HeaderMapExt};

pub const SESSION_COOKIE: &str = "sessionid";

/// Resolves the session cookie into a [`RequestContext`] for handlers and
/// issues a cookie for freshly minted sessions.
pub async fn session_middleware(
    Extension(state): Extension<HttpState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
        .and_then(|signed| state.cookie_signer.verify(&signed))
        .and_then(|raw| raw.parse::<SessionId>().ok());

    let resolved = match state.services.sessions.resolve(presented).await {
        Ok(resolved) => resolved,
        Err(err) => return HttpError::from_error(err).into_response(),
    };
    let session_id = resolved.id;
    let is_new = resolved.is_new;

    req.extensions_mut().insert(RequestContext::from(resolved));
    let mut response = next.run(req).await;

    // Handlers that rotate the session set their own cookie.
    if is_new && !response.headers().contains_key(SET_COOKIE) {
        set_session_cookie(&mut response, &state, session_id);
    }
    response
}

pub fn session_cookie(state: &HttpState, id: SessionId) -> Option<HeaderValue> {
    let signed = state.cookie_signer.sign(&id.to_string());
    let value = format!(
        "{SESSION_COOKIE}={signed}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.session_ttl.as_secs()
    );
    HeaderValue::from_str(&value).ok()
}

pub fn set_session_cookie(response: &mut Response, state: &HttpState, id: SessionId) {
    match session_cookie(state, id) {
        Some(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        None => tracing::error!("session cookie is not a valid header value"),
    }
}
