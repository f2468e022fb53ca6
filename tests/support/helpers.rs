use super::mocks::{FixedClock, InMemoryCookbook, PlainPasswordHasher, TEST_COOKIE_KEY};
use axum::{
    Router,
    body::{self, Body},
    http::{
        Method, Request, Response, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use cookbook_cms::{
    application::services::ApplicationServices,
    infrastructure::{
        security::{cookie::HmacCookieSigner, session_store::InMemorySessionStore},
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router_with_rate_limiter, state::HttpState},
};
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

pub const PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryCookbook>,
}

pub fn make_test_app_with_page_size(page_size: u32) -> TestApp {
    let store = Arc::new(InMemoryCookbook::new());
    let ttl = Duration::from_secs(3600);

    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(InMemorySessionStore::new(ttl)),
        Arc::new(PlainPasswordHasher),
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        page_size,
    ));

    let state = HttpState {
        services,
        cookie_signer: Arc::new(HmacCookieSigner::new(TEST_COOKIE_KEY).unwrap()),
        session_ttl: ttl,
    };

    TestApp {
        router: build_router_with_rate_limiter(state, false),
        store,
    }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_page_size(10)
}

/// A browser stand-in that keeps the session cookie between requests.
pub struct Client {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub fn client(&self) -> Client {
        Client {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// A client already logged in as `username` (password [`PASSWORD`]).
    pub async fn logged_in(&self, username: &str) -> Client {
        let mut client = self.client();
        let resp = client
            .post_form(
                "/auth/login/",
                &[("username", username), ("password", PASSWORD)],
            )
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login failed for {username}");
        client
    }
}

impl Client {
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn send(&mut self, mut req: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            req.headers_mut().insert(COOKIE, cookie.parse().unwrap());
        }
        let resp = self.router.clone().oneshot(req).await.unwrap();
        if let Some(cookie) = session_cookie(&resp) {
            self.cookie = Some(cookie);
        }
        resp
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn get_text(&mut self, uri: &str) -> (StatusCode, String) {
        let resp = self.get(uri).await;
        let status = resp.status();
        (status, body_text(resp).await)
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }

    /// Follows a redirect response with a GET and returns the page text.
    pub async fn follow(&mut self, resp: Response<Body>) -> (StatusCode, String) {
        let to = location(&resp).expect("redirect without Location");
        self.get_text(&to).await
    }
}

/// The `sessionid=<value>` pair from a Set-Cookie header, if any.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with("sessionid="))
        .map(str::to_owned)
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
