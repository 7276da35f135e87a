//! Chat relay configuration (`[chat]` section)

use portfolio_domain::Environment;
use serde::{Deserialize, Serialize};

/// Which chat backend the relay forwards to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatBackendKind {
    /// External chat service over HTTP
    #[default]
    Remote,
    /// Built-in keyword responder, no network
    Canned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub backend: ChatBackendKind,
    /// Chat service base URL used in development
    pub development_url: String,
    /// Chat service base URL used in production
    pub production_url: String,
    /// First assistant message shown by chat clients
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend: ChatBackendKind::Remote,
            development_url: "http://localhost:5001".to_string(),
            production_url: "https://your-flask-backend.com".to_string(),
            greeting: "Hi! Ask me anything about my skills, projects, \
                       or whether I prefer TensorFlow or PyTorch."
                .to_string(),
        }
    }
}

impl ChatConfig {
    /// Base URL of the chat service for the given environment
    pub fn base_url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.development_url,
            Environment::Production => &self.production_url,
        }
    }
}
