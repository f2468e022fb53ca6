// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, ingredients, recipes},
    middleware::{
        rate_limit::{AuthRateLimit, rate_limit_layer},
        session::session_middleware,
    },
};
use axum::{
    Extension, Json, Router,
    middleware::from_fn,
    routing::{MethodRouter, get, post},
};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// `rate_limit` guards the credential-accepting POST routes per client IP.
/// The limiter keys on the peer address, so the server must be run with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let limiter = if rate_limit {
        let layer = rate_limit_layer();
        if layer.is_none() {
            tracing::warn!("rate limiter configuration rejected; auth routes unthrottled");
        }
        layer
    } else {
        None
    };

    Router::new()
        .route("/health", get(health))
        .route("/", get(articles::list))
        .route("/index/{slug}", get(articles::detail))
        .route(
            "/article/create/",
            get(articles::create_page).post(articles::create_submit),
        )
        .route(
            "/article/create/form/",
            get(articles::create_form_page).post(articles::create_form_submit),
        )
        .route(
            "/article/change/{slug}",
            get(articles::change_page).post(articles::change_submit),
        )
        .route(
            "/article/delete/{slug}",
            get(articles::delete_page).post(articles::delete_submit),
        )
        .route("/recipe/", get(recipes::list))
        .route("/recipe/my/", get(recipes::my_list))
        .route(
            "/recipe/create/",
            get(recipes::create_page).post(recipes::create_submit),
        )
        .route("/recipe/{slug}/", get(recipes::detail))
        .route(
            "/recipe/{slug}/update/",
            get(recipes::update_page).post(recipes::update_submit),
        )
        .route(
            "/recipe/{slug}/delete/",
            get(recipes::delete_page).post(recipes::delete_submit),
        )
        .route(
            "/recipe/{slug}/ingredient/create/",
            get(ingredients::create_page).post(ingredients::create_submit),
        )
        .route(
            "/recipe/{slug}/ingredient/{pk}/edit/",
            get(ingredients::edit_page).post(ingredients::edit_submit),
        )
        .route(
            "/recipe/{slug}/ingredient/{pk}/delete/",
            get(ingredients::delete_page).post(ingredients::delete_submit),
        )
        .route(
            "/auth/login/",
            throttled(limiter.as_ref(), post(auth::login_submit)).get(auth::login_page),
        )
        .route(
            "/auth/login/direct/",
            throttled(limiter.as_ref(), post(auth::login_direct)).get(auth::login_direct_page),
        )
        .route(
            "/auth/register/",
            throttled(limiter.as_ref(), post(auth::register_submit)).get(auth::register_page),
        )
        .route("/auth/logout/", get(auth::logout_page).post(auth::logout_submit))
        .layer(from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

// Methods chained after `layer` stay unthrottled.
fn throttled(limiter: Option<&AuthRateLimit>, route: MethodRouter) -> MethodRouter {
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
