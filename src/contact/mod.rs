//! Contact form: the submission record, its validation rules, the
//! submit lifecycle and the wire contract of the contact endpoint.

mod revert;
mod transport;
mod validate;
mod workflow;

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
pub use revert::BrowserScheduler;
#[cfg(feature = "hydrate")]
pub use transport::HttpTransport;
pub use revert::{RevertScheduler, RevertTimer};
pub use transport::{
    decode_reply_body, ContactOutcome, ContactReply, ContactTransport, TransportError,
};
pub use validate::{is_valid_email, validate, FieldErrors, MESSAGE_LEN, NAME_LEN, SUBJECT_LEN};
pub use workflow::{ContactForm, Notice, NoticeLevel, SubmitState, SUBMITTED_DISPLAY};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Copy with surrounding whitespace removed from every field, the shape
    /// the endpoint validates.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// Body of every response from the contact endpoint. Which keys are present
/// depends on the outcome: `success`+`message` when accepted, `errors` when
/// fields were rejected, `message` alone for any other failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: Some(true),
            message: Some("Your message has been sent successfully!".to_string()),
            ..Default::default()
        }
    }

    pub fn rejected(errors: &FieldErrors) -> Self {
        Self {
            error: Some("Validation failed".to_string()),
            errors: Some(
                errors
                    .iter()
                    .map(|(field, msg)| (field.to_string(), msg.clone()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn failed(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: Some(error.to_string()),
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("form".parse::<Field>().is_err());
    }

    #[test]
    fn test_trimmed() {
        let submission = ContactSubmission {
            name: "  Ada ".to_string(),
            email: "ada@example.com\n".to_string(),
            subject: "\tHello".to_string(),
            message: "body".to_string(),
        };
        let trimmed = submission.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.subject, "Hello");
        assert_eq!(trimmed.message, "body");
    }

    #[test]
    fn test_rejected_body_shape() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Email address is invalid".to_string());
        let body = serde_json::to_value(ContactResponse::rejected(&errors)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Validation failed",
                "errors": { "email": "Email address is invalid" }
            })
        );
    }

    #[test]
    fn test_submission_wire_keys() {
        let body = serde_json::to_value(ContactSubmission {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi there".to_string(),
            message: "1234567890".to_string(),
        })
        .unwrap();
        let mut keys = body
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, ["email", "message", "name", "subject"]);
    }
}
