//! Request correlation middleware

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use rolodex_core::RequestId;
use tracing::Instrument;

/// Stamp every request with a fresh id
///
/// The id is carried in a tracing span around the whole request and echoed
/// back in the `x-request-id` response header.
pub async fn request_id(request: Request, next: Next) -> Response {
    let id = RequestId::new();
    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
