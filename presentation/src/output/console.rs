//! Console output for the terminal clients

use colored::Colorize;
use portfolio_application::AppConfig;
use portfolio_domain::{
    ChatMessage, ConfigIssue, Notification, NotificationLevel, Role, Severity, Showcase,
};

/// Formats domain values for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the profile, projects and grouped skills
    pub fn format_showcase(showcase: &Showcase) -> String {
        let mut output = String::new();
        let profile = &showcase.profile;

        output.push_str(&Self::header(&profile.name));
        output.push('\n');
        output.push_str(&format!("{}\n", profile.headline.bold()));
        output.push_str(&format!("{}\n", profile.tagline.dimmed()));

        if !profile.about.is_empty() {
            output.push_str(&Self::section_header("About"));
            for paragraph in &profile.about {
                output.push_str(&format!("\n{}\n", paragraph));
            }
        }

        output.push_str(&Self::section_header("Projects"));
        for project in &showcase.projects {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", project.title).yellow().bold(),
                project.description
            ));
            output.push_str(&format!(
                "  {} {}\n",
                "Tech:".cyan(),
                project.tech.join(", ")
            ));
            output.push_str(&format!("  {} {}\n", "Demo:".cyan(), project.demo));
            output.push_str(&format!("  {} {}\n", "Code:".cyan(), project.github));
            if let Some(blog) = &project.blog {
                output.push_str(&format!("  {} {}\n", "Blog:".cyan(), blog));
            }
        }

        output.push_str(&Self::section_header("Skills"));
        for (category, skills) in showcase.skills_by_category() {
            let names = skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("{:<12} {}\n", category.label().bold(), names));
        }

        if !profile.links.is_empty() {
            output.push_str(&Self::section_header("Links"));
            for link in &profile.links {
                output.push_str(&format!("{:<12} {}\n", link.label.bold(), link.url));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format one transcript entry
    pub fn format_message(message: &ChatMessage) -> String {
        match message.role {
            Role::User => format!("{} {}", "You:".green().bold(), message.content),
            Role::Assistant => format!("{} {}", "Assistant:".cyan().bold(), message.content),
        }
    }

    pub fn format_notification(notification: &Notification) -> String {
        let title = match notification.level {
            NotificationLevel::Success => notification.title.green().bold(),
            NotificationLevel::Error => notification.title.red().bold(),
        };
        if notification.description.is_empty() {
            title.to_string()
        } else {
            format!("{}\n  {}", title, notification.description)
        }
    }

    /// One line per issue, errors first
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<&ConfigIssue> = issues.iter().collect();
        sorted.sort_by_key(|i| !i.is_error());

        sorted
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Effective configuration as TOML, secrets masked
    pub fn format_config(config: &AppConfig) -> String {
        match toml::to_string_pretty(&config.redacted()) {
            Ok(text) => text,
            Err(e) => format!("# failed to render configuration: {}", e),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_domain::ConfigIssueCode;

    fn plain<F: FnOnce() -> String>(f: F) -> String {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_format_showcase_lists_projects_and_skills() {
        let showcase = Showcase::default();
        let output = plain(|| ConsoleFormatter::format_showcase(&showcase));

        for project in &showcase.projects {
            assert!(output.contains(&project.title));
        }
        assert!(output.contains("AI/ML"));
    }

    #[test]
    fn test_format_message_labels_role() {
        let output = plain(|| ConsoleFormatter::format_message(&ChatMessage::user("hi")));
        assert_eq!(output, "You: hi");
        let output = plain(|| ConsoleFormatter::format_message(&ChatMessage::assistant("hello")));
        assert_eq!(output, "Assistant: hello");
    }

    #[test]
    fn test_format_config_issues_errors_first() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::MissingCredentials, "no creds"),
            ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "server.bind".to_string(),
                },
                "empty bind",
            ),
        ];
        let output = plain(|| ConsoleFormatter::format_config_issues(&issues));
        assert_eq!(output, "error: empty bind\nwarning: no creds");
    }

    #[test]
    fn test_format_config_masks_password() {
        let mut config = AppConfig::default();
        config.mail.password = "secret".to_string();
        let output = ConsoleFormatter::format_config(&config);
        assert!(!output.contains("secret"));
        assert!(output.contains("[server]"));
    }
}
