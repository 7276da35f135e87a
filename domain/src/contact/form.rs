//! Contact form state
//!
//! The form is either `Editing` or `Submitting`. A submission can only start
//! from `Editing`, so a second click while one is in flight does nothing.

use super::notification::Notification;
use super::submission::{ContactField, ContactSubmission};
use serde::{Deserialize, Serialize};

/// Title used for every failed submission notification
pub const ERROR_TITLE: &str = "Message not sent";

/// Description used when the relay did not say what went wrong
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
}

/// Editable contact form (Entity)
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrite one field (last write wins)
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: (!self.subject.trim().is_empty()).then(|| self.subject.clone()),
            message: Some(self.message.clone()),
        }
    }

    /// Start a submission.
    ///
    /// - `Ok(None)`: already submitting, nothing to do
    /// - `Err(notification)`: a required field is empty; nothing is sent
    /// - `Ok(Some(submission))`: the form is now `Submitting`
    pub fn begin_submit(&mut self) -> Result<Option<ContactSubmission>, Notification> {
        if self.state == FormState::Submitting {
            return Ok(None);
        }

        let submission = self.to_submission();
        if let Err(e) = submission.validate() {
            return Err(Notification::error(
                "Please fill in all required fields",
                e.to_string(),
            ));
        }

        self.state = FormState::Submitting;
        Ok(Some(submission))
    }

    /// Finish a submission and return the notification to show.
    ///
    /// `Err(Some(msg))` carries a relay-provided message, `Err(None)` means
    /// no usable message came back. The loading state is cleared in all cases.
    pub fn finish(&mut self, result: Result<(), Option<String>>) -> Notification {
        self.state = FormState::Editing;
        match result {
            Ok(()) => {
                self.clear();
                Notification::success(
                    "Message sent!",
                    "Thanks for reaching out. I'll get back to you soon.",
                )
            }
            Err(Some(message)) if !message.trim().is_empty() => {
                Notification::error(ERROR_TITLE, message)
            }
            Err(_) => Notification::error(ERROR_TITLE, GENERIC_FAILURE),
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
