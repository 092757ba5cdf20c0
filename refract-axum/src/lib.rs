//! Axum transport adapter for refract.
//!
//! Wraps a resolved [`ApiResponse`] so handlers can return it directly, and
//! maps resolution failures to bare 500s so a partial body never leaves the
//! process.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use refract_render::{ApiResponse, ResolveError, DEFAULT_MIMETYPE};
use tracing::error;

/// A resolved response ready to leave an axum handler.
///
/// Status and content type come straight from the [`ApiResponse`]; the body
/// is its JSON encoding. An out-of-range status degrades to 500 and an
/// unencodable mimetype to [`DEFAULT_MIMETYPE`] rather than panicking.
#[derive(Debug, Clone)]
pub struct Rendered(pub ApiResponse);

impl From<ApiResponse> for Rendered {
    fn from(response: ApiResponse) -> Self {
        Rendered(response)
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        let ApiResponse { body, mimetype, status } = self.0;

        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = HeaderValue::from_str(&mimetype)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_MIMETYPE));
        let bytes = match serde_json::to_vec(&body) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("response body encoding failed: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
    }
}

/// Map a resolution failure to the response the client sees: a bare 500.
/// The error itself is logged server-side only.
pub fn error_response(err: &ResolveError) -> Response {
    error!("representation failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// One-call bridge for handlers: a built response is rendered as-is, a
/// failed one becomes [`error_response`].
pub fn respond(result: Result<ApiResponse, ResolveError>) -> Response {
    match result {
        Ok(response) => Rendered(response).into_response(),
        Err(err) => error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_response(status: u16, mimetype: &str) -> ApiResponse {
        ApiResponse {
            body: json!({"ok": true}),
            mimetype: mimetype.to_string(),
            status,
        }
    }

    #[test]
    fn status_and_content_type_pass_through() {
        let response = Rendered(api_response(201, "application/hal+json")).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/hal+json"
        );
    }

    #[test]
    fn out_of_range_status_degrades_to_500() {
        let response = Rendered(api_response(42, DEFAULT_MIMETYPE)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unencodable_mimetype_falls_back_to_default() {
        let response = Rendered(api_response(200, "broken\nmimetype")).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            DEFAULT_MIMETYPE
        );
    }

    #[test]
    fn resolve_error_maps_to_bare_500() {
        let err = ResolveError::CyclicRepresentation {
            entity_type: "user".to_string(),
        };
        let response = error_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn respond_renders_ok_and_maps_err() {
        let ok = respond(Ok(api_response(200, DEFAULT_MIMETYPE)));
        assert_eq!(ok.status(), StatusCode::OK);

        let err = respond(Err(ResolveError::CyclicRepresentation {
            entity_type: "user".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
