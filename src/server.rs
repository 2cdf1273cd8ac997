//! Server side of the contact endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use thiserror::Error;

use crate::contact::{validate, ContactResponse, ContactSubmission, FieldErrors, CONTACT_ENDPOINT};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Validation failed")]
    Invalid(FieldErrors),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::BadRequest(reason) => ContactResponse::failed("Invalid request", reason.clone()),
            ApiError::Invalid(errors) => ContactResponse::rejected(errors),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Routes served next to the Leptos app.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(CONTACT_ENDPOINT, post(handle_contact))
}

async fn handle_contact(
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(submission) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    tracing::debug!("contact form submission received");

    let submission = submission.trimmed();
    let errors = validate(&submission);
    if !errors.is_empty() {
        tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "contact form rejected");
        return Err(ApiError::Invalid(errors));
    }

    tracing::info!(from = %submission.email, "contact message accepted");
    tracing::debug!(
        name = %submission.name,
        subject = %submission.subject,
        message = %submission.message,
        "contact message body"
    );
    Ok(Json(ContactResponse::accepted()))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use tower::ServiceExt;

    use super::*;

    async fn post_json(body: &str) -> (StatusCode, ContactResponse) {
        let app: Router = api_routes();
        let response = app
            .oneshot(
                Request::post(CONTACT_ENDPOINT)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_valid_submission() {
        let (status, body) = post_json(
            r#"{"name":"Al","email":"a@b.co","subject":"Hi there","message":"1234567890"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ContactResponse::accepted());
    }

    #[tokio::test]
    async fn test_rejects_with_field_errors() {
        let (status, body) = post_json(
            r#"{"name":"Al","email":"not-an-email","subject":"Hi there","message":"1234567890"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = body.errors.expect("errors should be reported");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Email address is invalid");
    }

    #[tokio::test]
    async fn test_whitespace_is_trimmed_before_validation() {
        let (status, body) = post_json(
            r#"{"name":" A ","email":"a@b.co","subject":"Hi there","message":"1234567890"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.errors.unwrap().contains_key("name"));
    }

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_info_log_names_only_the_sender() {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _) = post_json(
            r#"{"name":"Al","email":"a@b.co","subject":"Private matter","message":"my secret details"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("contact message accepted"));
        assert!(logs.contains("a@b.co"));
        assert!(!logs.contains("my secret details"));
        assert!(!logs.contains("Private matter"));
    }

    #[tokio::test]
    async fn test_malformed_json_has_message() {
        let (status, body) = post_json(r#"{"name":"Al""#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Invalid request"));
        assert!(body.message.is_some());
        assert!(body.errors.is_none());
    }
}
