use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-IP limit for credential-accepting routes: a burst of 5, then one
/// request every 2 seconds.
pub fn rate_limit_layer() -> Option<AuthRateLimit> {
    static RATE_LIMITER: OnceLock<Option<AuthRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(5);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

            Some(GovernorLayer::new(config))
        })
        .clone()
}
