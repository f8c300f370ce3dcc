// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

type CredentialLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per client IP limiter for the credential endpoints (register, login).
/// One shared quota store for the whole process.
pub fn rate_limit_layer() -> CredentialLimiter {
    static RATE_LIMITER: OnceLock<CredentialLimiter> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
