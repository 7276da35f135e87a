//! Contact form controller
//!
//! Holds the form fields and sends a validated submission to the contact
//! relay. Validation failures never reach the network.

use crate::ports::relay_client::ContactEndpoint;
use portfolio_domain::{ContactField, ContactForm, Notification};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ContactFormController {
    endpoint: Arc<dyn ContactEndpoint>,
    form: ContactForm,
}

impl ContactFormController {
    pub fn new(endpoint: Arc<dyn ContactEndpoint>) -> Self {
        Self {
            endpoint,
            form: ContactForm::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the form and return the notification to show.
    ///
    /// `None` means a submission was already in progress and nothing happened.
    pub async fn submit(&mut self) -> Option<Notification> {
        let submission = match self.form.begin_submit() {
            Ok(Some(submission)) => submission,
            Ok(None) => return None,
            Err(notification) => {
                debug!("Contact form rejected locally: {}", notification.description);
                return Some(notification);
            }
        };

        let result = self.endpoint.submit(&submission).await.map_err(|e| {
            warn!("Contact submission failed: {}", e);
            e.server_message().map(str::to_string)
        });

        Some(self.form.finish(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::relay_client::EndpointError;
    use async_trait::async_trait;
    use portfolio_domain::{ContactSubmission, NotificationLevel};
    use portfolio_domain::contact::form::GENERIC_FAILURE;
    use std::sync::Mutex;

    struct StubContactEndpoint {
        result: Result<(), EndpointError>,
        calls: Mutex<Vec<ContactSubmission>>,
    }

    impl StubContactEndpoint {
        fn new(result: Result<(), EndpointError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ContactEndpoint for StubContactEndpoint {
        async fn submit(&self, submission: &ContactSubmission) -> Result<(), EndpointError> {
            self.calls.lock().unwrap().push(submission.clone());
            self.result.clone()
        }
    }

    fn fill(controller: &mut ContactFormController) {
        controller.set_field(ContactField::Name, "Ada");
        controller.set_field(ContactField::Email, "ada@example.com");
        controller.set_field(ContactField::Message, "Let's talk");
    }

    #[tokio::test]
    async fn test_each_missing_required_field_blocks_submission() {
        for missing in ContactField::REQUIRED {
            let endpoint = StubContactEndpoint::new(Ok(()));
            let mut controller = ContactFormController::new(endpoint.clone());
            fill(&mut controller);
            controller.set_field(missing, "");

            let notification = controller.submit().await.unwrap();
            assert_eq!(notification.level, NotificationLevel::Error);
            assert!(endpoint.calls.lock().unwrap().is_empty());
            assert!(!controller.is_loading());
        }
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let endpoint = StubContactEndpoint::new(Ok(()));
        let mut controller = ContactFormController::new(endpoint.clone());
        fill(&mut controller);

        let notification = controller.submit().await.unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert!(controller.form().field(ContactField::Name).is_empty());
        assert_eq!(endpoint.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_message_is_shown() {
        let endpoint = StubContactEndpoint::new(Err(EndpointError::Rejected {
            status: 500,
            message: Some("Failed to send message".to_string()),
        }));
        let mut controller = ContactFormController::new(endpoint);
        fill(&mut controller);

        let notification = controller.submit().await.unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.description, "Failed to send message");
        assert!(!controller.is_loading());
        assert_eq!(controller.form().field(ContactField::Name), "Ada");
    }

    #[tokio::test]
    async fn test_transport_error_uses_generic_message() {
        let endpoint = StubContactEndpoint::new(Err(EndpointError::Transport("timeout".into())));
        let mut controller = ContactFormController::new(endpoint);
        fill(&mut controller);

        let notification = controller.submit().await.unwrap();
        assert_eq!(notification.description, GENERIC_FAILURE);
        assert!(!controller.is_loading());
    }
}
