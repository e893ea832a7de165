//! Security headers middleware.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Middleware that adds security headers to all responses.
///
/// - **Cache-Control: no-store**
///   Responses carry account data and session cookies; nothing should be
///   cached by intermediaries.
///
/// - **X-Content-Type-Options: nosniff**
///   Prevents MIME type sniffing attacks by forcing browsers to respect
///   declared Content-Type headers.
///
/// - **X-Frame-Options: DENY**
///   Prevents clickjacking by disallowing the API's responses from being
///   embedded in frames.
///
/// - **Referrer-Policy: no-referrer**
///   Keeps request URLs out of the Referer header on navigation.
///
/// - **Strict-Transport-Security**
///   Forces HTTPS connections for 2 years (including subdomains).
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("cache-control", HeaderValue::from_static("no-store"));
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "strict-transport-security",
        HeaderValue::from_static("max-age=63072000; includeSubDomains"),
    );

    response
}
