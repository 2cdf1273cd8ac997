use std::{collections::BTreeMap, future::Future};

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::{ContactResponse, ContactSubmission};

pub(crate) const GENERIC_FAILURE: &str = "Failed to send message";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("couldn't determine the page origin")]
    NoOrigin,
    #[error("couldn't reach the contact endpoint: {0}")]
    Request(String),
}

/// Sends a submission to the contact endpoint. Implementations perform
/// exactly one request per call and never retry.
pub trait ContactTransport {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<ContactReply, TransportError>>;
}

/// What came back from the endpoint: the status code and the body, if it
/// could be read as a [`ContactResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub status: u16,
    pub body: Option<ContactResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Accepted,
    Rejected(BTreeMap<String, String>),
    Failed(String),
}

impl ContactReply {
    pub fn new(status: u16, body: Option<ContactResponse>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        StatusCode::from_u16(self.status)
            .map(|status| status.is_success())
            .unwrap_or(false)
    }

    pub fn outcome(self) -> ContactOutcome {
        if self.is_success() {
            return ContactOutcome::Accepted;
        }
        let body = self.body.unwrap_or_default();
        match body.errors {
            Some(errors) if !errors.is_empty() => ContactOutcome::Rejected(errors),
            _ => ContactOutcome::Failed(
                body.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ),
        }
    }
}

/// The parts of a reply body the form acts on. Other keys are ignored
/// whatever their type.
#[derive(Debug, Default, Deserialize)]
struct ReplyFields {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, String>>,
}

impl From<ReplyFields> for ContactResponse {
    fn from(fields: ReplyFields) -> Self {
        Self {
            message: fields.message,
            errors: fields.errors,
            ..Default::default()
        }
    }
}

/// Reads a reply body, keeping only `message` and `errors`. Returns `None`
/// when the body isn't a JSON object with those keys in a usable shape.
pub fn decode_reply_body(bytes: &[u8]) -> Option<ContactResponse> {
    match serde_json::from_slice::<ReplyFields>(bytes) {
        Ok(fields) => Some(fields.into()),
        Err(e) => {
            log::debug!("contact reply body unreadable: {e}");
            None
        }
    }
}

/// Posts submissions as JSON to the contact endpoint of the page's origin.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "hydrate")]
impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn same_origin() -> Result<Self, TransportError> {
        // reqwest needs an absolute url in the browser
        let origin = leptos::prelude::window()
            .location()
            .origin()
            .map_err(|_| TransportError::NoOrigin)?;
        Ok(Self::new(format!("{origin}{}", super::CONTACT_ENDPOINT)))
    }
}

#[cfg(feature = "hydrate")]
impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReply, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => decode_reply_body(&bytes),
            Err(e) => {
                log::debug!("contact reply body unreadable: {e}");
                None
            }
        };
        Ok(ContactReply::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_2xx_is_accepted() {
        for status in [200, 201, 202, 204] {
            assert_eq!(
                ContactReply::new(status, None).outcome(),
                ContactOutcome::Accepted
            );
        }
        let with_body = ContactReply::new(200, Some(ContactResponse::accepted()));
        assert_eq!(with_body.outcome(), ContactOutcome::Accepted);
    }

    #[test]
    fn test_field_errors_are_rejection() {
        let body: ContactResponse = serde_json::from_str(
            r#"{"error":"Validation failed","errors":{"email":"Email address is invalid"}}"#,
        )
        .unwrap();
        let outcome = ContactReply::new(400, Some(body)).outcome();
        let ContactOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Email address is invalid");
    }

    #[test]
    fn test_failure_message_and_default() {
        let body = ContactResponse::failed("Server error", "Mailbox unavailable");
        assert_eq!(
            ContactReply::new(500, Some(body)).outcome(),
            ContactOutcome::Failed("Mailbox unavailable".to_string())
        );
        assert_eq!(
            ContactReply::new(502, None).outcome(),
            ContactOutcome::Failed(GENERIC_FAILURE.to_string())
        );
        let empty_errors = ContactResponse {
            errors: Some(BTreeMap::new()),
            ..Default::default()
        };
        assert_eq!(
            ContactReply::new(400, Some(empty_errors)).outcome(),
            ContactOutcome::Failed(GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_reply_keys_of_other_types_are_ignored() {
        let body = decode_reply_body(
            br#"{"error":{"code":422},"errors":{"email":"Email address is invalid"}}"#,
        );
        let outcome = ContactReply::new(422, body).outcome();
        let ContactOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors["email"], "Email address is invalid");

        let body = decode_reply_body(br#"{"success":0,"message":"Mailbox full"}"#);
        assert_eq!(
            ContactReply::new(500, body).outcome(),
            ContactOutcome::Failed("Mailbox full".to_string())
        );
    }

    #[test]
    fn test_unreadable_body_falls_back() {
        assert_eq!(decode_reply_body(b"<html>bad gateway</html>"), None);
        assert_eq!(decode_reply_body(br#"{"message":42}"#), None);
        assert_eq!(
            ContactReply::new(502, decode_reply_body(b"")).outcome(),
            ContactOutcome::Failed(GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_server_bodies_decode() {
        let accepted = serde_json::to_vec(&ContactResponse::accepted()).unwrap();
        assert_eq!(
            decode_reply_body(&accepted).and_then(|b| b.message).as_deref(),
            Some("Your message has been sent successfully!")
        );
    }

    #[test]
    fn test_invalid_status_is_failure() {
        assert!(!ContactReply::new(42, None).is_success());
    }
}
