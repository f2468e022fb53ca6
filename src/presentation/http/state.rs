// src/presentation/http/state.rs
use crate::application::{ports::security::CookieSigner, services::ApplicationServices};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub cookie_signer: Arc<dyn CookieSigner>,
    /// Max-Age of the session cookie.
    pub session_ttl: Duration,
}
