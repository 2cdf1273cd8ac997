use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{
    transport::{ContactOutcome, ContactReply, ContactTransport, TransportError},
    validate::{validate, FieldErrors},
    ContactSubmission, Field,
};

/// How long the "message sent" state is shown before the form comes back.
pub const SUBMITTED_DISPLAY: Duration = Duration::from_millis(3000);

const SENT_NOTICE: &str = "Message sent successfully!";
const UNREACHABLE_NOTICE: &str = "An error occurred. Please try again later.";
const FORM_BANNER: &str = "Failed to submit the form. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the user, shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// State of the contact form across one or more submit attempts.
///
/// Sending is split in two so that the record can be handed to an async
/// transport without holding the form: [`ContactForm::begin_submit`] yields
/// the record to send (at most one at a time) and
/// [`ContactForm::finish_submit`] applies what the transport returned.
/// Time is always passed in, never read, so callers decide which clock to use.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    record: ContactSubmission,
    errors: FieldErrors,
    form_error: Option<String>,
    state: SubmitState,
    submitted_at: Option<DateTime<Utc>>,
    notices: Vec<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ContactSubmission {
        &self.record
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.field(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmitState::Submitted
    }

    /// Replaces one field. Any error shown for that field goes away, whether
    /// or not the new value is valid; validation only runs on submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.record.field_mut(field) = value.into();
        self.errors.remove(&field);
        if self.state == SubmitState::Failed {
            self.state = SubmitState::Idle;
        }
    }

    /// Starts a submit attempt. Returns the record to send, or `None` when
    /// nothing should be sent: a request is already in flight, the success
    /// panel is showing, or local validation failed.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        match self.state {
            SubmitState::Submitting | SubmitState::Submitted => return None,
            SubmitState::Idle | SubmitState::Failed => {}
        }
        self.form_error = None;

        let errors = validate(&self.record);
        if !errors.is_empty() {
            log::debug!("contact form invalid: {:?}", errors.keys());
            self.notices
                .extend(errors.values().map(|msg| Notice::error(msg.clone())));
            self.errors = errors;
            self.state = SubmitState::Failed;
            return None;
        }

        self.errors.clear();
        self.state = SubmitState::Submitting;
        Some(self.record.clone())
    }

    /// Applies the transport result of the attempt started by
    /// [`ContactForm::begin_submit`]. Returns how long the success state
    /// should be shown when the message was accepted.
    pub fn finish_submit(
        &mut self,
        result: Result<ContactReply, TransportError>,
        now: DateTime<Utc>,
    ) -> Option<Duration> {
        if self.state != SubmitState::Submitting {
            log::warn!("contact reply arrived with no submission in flight");
            return None;
        }

        let outcome = match result {
            Ok(reply) => reply.outcome(),
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.fail(UNREACHABLE_NOTICE);
                return None;
            }
        };

        match outcome {
            ContactOutcome::Accepted => {
                self.record = ContactSubmission::default();
                self.errors.clear();
                self.state = SubmitState::Submitted;
                self.submitted_at = Some(now);
                self.notices.push(Notice::success(SENT_NOTICE));
                Some(SUBMITTED_DISPLAY)
            }
            ContactOutcome::Rejected(reported) => {
                for (name, msg) in reported {
                    match name.parse::<Field>() {
                        Ok(field) => {
                            self.errors.insert(field, msg.clone());
                        }
                        Err(()) => log::warn!("endpoint rejected unknown field {name}"),
                    }
                    self.notices.push(Notice::error(msg));
                }
                self.state = SubmitState::Failed;
                None
            }
            ContactOutcome::Failed(msg) => {
                self.fail(msg);
                None
            }
        }
    }

    fn fail(&mut self, notice: impl Into<String>) {
        self.notices.push(Notice::error(notice));
        self.form_error = Some(FORM_BANNER.to_string());
        self.state = SubmitState::Failed;
    }

    /// Leaves the success state once [`SUBMITTED_DISPLAY`] has passed.
    /// While still inside the window, returns the time left.
    pub fn poll_revert(&mut self, now: DateTime<Utc>) -> Option<Duration> {
        if self.state != SubmitState::Submitted {
            return None;
        }
        let elapsed = self
            .submitted_at
            .map(|at| (now - at).to_std().unwrap_or_default())
            .unwrap_or(SUBMITTED_DISPLAY);
        if elapsed >= SUBMITTED_DISPLAY {
            self.state = SubmitState::Idle;
            self.submitted_at = None;
            None
        } else {
            Some(SUBMITTED_DISPLAY - elapsed)
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Runs one whole attempt against `transport`, reading the time of the
    /// reply from `clock`.
    pub async fn submit<T, C>(&mut self, transport: &T, clock: C) -> Option<Duration>
    where
        T: ContactTransport,
        C: Fn() -> DateTime<Utc>,
    {
        let submission = self.begin_submit()?;
        let result = transport.send(&submission).await;
        self.finish_submit(result, clock())
    }
}
