//! Edge middleware: cross-origin headers on every response and the
//! last-resort panic boundary.

use std::any::Any;
use std::backtrace::Backtrace;

use axum::body::Bytes;
use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method, Response, StatusCode};
use axum::middleware::Next;
use axum::response::IntoResponse;
use http_body_util::Full;

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Answers CORS preflight directly with 204 and appends the cross-origin
/// headers to every other response, whatever its status.
pub async fn cors(request: Request, next: Next) -> axum::response::Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors(response.headers_mut());
    response
}

/// Renders a panic payload as text. Panics carry `&str` or `String` unless
/// raised with `panic_any`.
pub fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Converts a panic anywhere below into a JSON 500 carrying the panic
/// message and a captured backtrace. Runs inside the CORS layer, so even
/// these responses carry the cross-origin headers.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let message = panic_message(err.as_ref());
    tracing::error!("request handler panicked: {}", message);

    let body = serde_json::json!({
        "success": false,
        "error": message,
        "trace": Backtrace::force_capture().to_string(),
    })
    .to_string();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static response parts are valid")
}
