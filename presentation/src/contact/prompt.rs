//! Prompts for contact form fields and submits them

use crate::progress::WaitingIndicator;
use portfolio_application::ContactFormController;
use portfolio_domain::{ContactField, Notification};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

const FIELD_ORDER: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

/// Fills a [`ContactFormController`] from arguments and, for whatever is
/// still missing, from the terminal.
pub struct ContactPrompt {
    controller: ContactFormController,
    show_progress: bool,
}

impl ContactPrompt {
    pub fn new(controller: ContactFormController) -> Self {
        Self {
            controller,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Pre-fill a field; `None` leaves it for the prompt
    pub fn with_field(mut self, field: ContactField, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.controller.set_field(field, value);
        }
        self
    }

    /// Required fields that are still blank
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|f| self.controller.form().field(*f).trim().is_empty())
            .collect()
    }

    /// Prompt for missing fields, then submit.
    ///
    /// Returns `None` when the user aborted at a prompt or a submission was
    /// already running.
    pub async fn run(&mut self) -> RlResult<Option<Notification>> {
        if !self.missing_fields().is_empty() && !self.prompt_missing()? {
            println!("Cancelled.");
            return Ok(None);
        }

        let indicator = WaitingIndicator::start("Sending message...", self.show_progress);
        let notification = self.controller.submit().await;
        indicator.finish();

        Ok(notification)
    }

    /// Returns false if the user pressed Ctrl-C / Ctrl-D
    fn prompt_missing(&mut self) -> RlResult<bool> {
        let mut rl = DefaultEditor::new()?;

        for field in FIELD_ORDER {
            if !self.controller.form().field(field).trim().is_empty() {
                continue;
            }

            let prompt = if field.is_required() {
                format!("{}: ", field)
            } else {
                format!("{} (optional): ", field)
            };

            loop {
                match rl.readline(&prompt) {
                    Ok(value) => {
                        if field.is_required() && value.trim().is_empty() {
                            println!("{} is required", field);
                            continue;
                        }
                        self.controller.set_field(field, value);
                        break;
                    }
                    Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                        return Ok(false);
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(true)
    }
}
