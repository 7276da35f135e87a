//! Showcase value objects

use serde::{Deserialize, Serialize};

/// Grouping used by the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "AI/ML")]
    AiMl,
    Frontend,
    Backend,
    Automation,
    Tools,
    Data,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::AiMl,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Automation,
        SkillCategory::Tools,
        SkillCategory::Data,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Automation => "Automation",
            SkillCategory::Tools => "Tools",
            SkillCategory::Data => "Data",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: &str, icon: &str, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            category,
        }
    }
}

/// A featured project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub demo: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
}

impl Project {
    pub fn new(title: &str, description: &str, tech: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            demo: "#".to_string(),
            github: "#".to_string(),
            blog: None,
        }
    }

    pub fn with_blog(mut self, url: &str) -> Self {
        self.blog = Some(url.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

/// Hero and about-me content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub links: Vec<ProfileLink>,
}
