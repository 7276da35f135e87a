//! Root application configuration

use super::chat::{ChatBackendKind, ChatConfig};
use super::mail::MailConfig;
use super::server::{LoggingConfig, ServerConfig};
use portfolio_domain::{ConfigIssue, ConfigIssueCode, Environment};
use serde::{Deserialize, Serialize};

/// Complete configuration, constructed once at process startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment; selects the chat backend URL
    pub environment: Environment,
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub mail: MailConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Base URL of the chat service for the configured environment
    pub fn chat_base_url(&self) -> &str {
        self.chat.base_url(self.environment)
    }

    /// Copy with secrets masked, for display
    pub fn redacted(&self) -> Self {
        Self {
            mail: self.mail.redacted(),
            ..self.clone()
        }
    }

    /// Validate the configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Server bind address is set and the worker count is non-zero
    /// 2. Chat URL for the active environment (remote backend only)
    /// 3. Mail credentials and addresses
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Server
        if self.server.bind.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "server.bind".to_string(),
                },
                "server.bind must not be empty",
            ));
        }
        if self.server.workers == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "server.workers".to_string(),
                    value: "0".to_string(),
                },
                "server.workers must be at least 1",
            ));
        }

        // 2. Chat backend URL
        if self.chat.backend == ChatBackendKind::Remote {
            let field = match self.environment {
                Environment::Development => "chat.development_url",
                Environment::Production => "chat.production_url",
            };
            let url = self.chat_base_url();
            if url.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} must be set when chat.backend = \"remote\"", field),
                ));
            } else if !(url.starts_with("http://") || url.starts_with("https://")) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidUrl {
                        field: field.to_string(),
                        value: url.to_string(),
                    },
                    format!("{}: '{}' is not an http(s) URL", field, url),
                ));
            }
        }

        // 3. Mail
        if !self.mail.has_credentials() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredentials,
                "mail.user / mail.password are not set; contact submissions will fail",
            ));
        } else {
            if self.mail.sender().is_err() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidAddress {
                        field: "mail.user".to_string(),
                        value: self.mail.user.clone(),
                    },
                    format!("mail.user: '{}' is not an email address", self.mail.user),
                ));
            }
            if self.mail.recipient().is_err() {
                let value = self.mail.recipient.clone().unwrap_or_default();
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidAddress {
                        field: "mail.recipient".to_string(),
                        value: value.clone(),
                    },
                    format!("mail.recipient: '{}' is not an email address", value),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_domain::Severity;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.mail.user = "me@example.com".to_string();
        config.mail.password = "app-password".to_string();
        config
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
environment = "production"

[chat]
production_url = "https://chat.example.com"

[mail]
user = "me@example.com"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.chat_base_url(), "https://chat.example.com");
        assert_eq!(config.mail.user, "me@example.com");
        // Defaults still apply
        assert_eq!(config.mail.default_subject, "New Contact Form Submission");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(valid_config().validate().is_empty());
    }

    #[test]
    fn test_missing_credentials_is_warning() {
        let issues = AppConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].code, ConfigIssueCode::MissingCredentials);
    }

    #[test]
    fn test_bad_chat_url_is_error() {
        let mut config = valid_config();
        config.chat.development_url = "localhost:5001".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
    }

    #[test]
    fn test_zero_workers_is_error() {
        let mut config = valid_config();
        config.server.workers = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::OutOfRange { .. }));

        config.server.workers = Some(2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_canned_backend_skips_url_check() {
        let mut config = valid_config();
        config.chat.backend = ChatBackendKind::Canned;
        config.chat.development_url.clear();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_redacted_masks_password() {
        let config = valid_config().redacted();
        assert_eq!(config.mail.password, "********");
        assert_eq!(config.mail.user, "me@example.com");
    }
}
