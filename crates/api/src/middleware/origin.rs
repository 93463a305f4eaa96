//! Origin allow-list gate and the CORS layer built from the same list.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use movies_core::origin::{OriginDecision, OriginPolicy};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Reject requests whose `Origin` header is not on the allow-list.
///
/// Requests without an `Origin` header pass through. A header that is not
/// valid UTF-8 cannot be on the list and is rejected. Rejections are a
/// plain-text 403, not a JSON body.
pub async fn enforce_origin_policy(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let decision = match request.headers().get(ORIGIN) {
        None => policy.check(None),
        Some(value) => match value.to_str() {
            Ok(origin) => policy.check(Some(origin)),
            Err(_) => OriginDecision::Deny,
        },
    };

    match decision {
        OriginDecision::Allow => next.run(request).await,
        OriginDecision::Deny => {
            tracing::warn!(
                origin = ?request.headers().get(ORIGIN),
                method = %request.method(),
                uri = %request.uri(),
                "Rejected request from disallowed origin",
            );
            (StatusCode::FORBIDDEN, "Not allowed by CORS").into_response()
        }
    }
}

/// Build the CORS layer that decorates responses to allowed origins and
/// answers their preflight requests.
pub fn build_cors_layer(policy: &OriginPolicy) -> CorsLayer {
    let origins: Vec<HeaderValue> = policy
        .allowed_origins()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
