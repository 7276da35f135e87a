//! Built-in showcase content

use super::entities::{Profile, ProfileLink, Project, Skill, SkillCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the static sections of the page render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Showcase {
    /// Skills grouped by category, in category order
    pub fn skills_by_category(&self) -> BTreeMap<SkillCategory, Vec<&Skill>> {
        let mut groups: BTreeMap<SkillCategory, Vec<&Skill>> = BTreeMap::new();
        for skill in &self.skills {
            groups.entry(skill.category).or_default().push(skill);
        }
        groups
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            projects: default_projects(),
            skills: default_skills(),
        }
    }
}

fn link(label: &str, url: &str) -> ProfileLink {
    ProfileLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn default_profile() -> Profile {
    Profile {
        name: "Kurian Jose".to_string(),
        headline: "AI Developer".to_string(),
        tagline: "I build AI tools for law, finance, and automation".to_string(),
        about: vec![
            "I'm passionate about building AI tools that solve real-world problems, \
             particularly in law and finance."
                .to_string(),
            "What drives me is the intersection of technology and human needs. \
             I believe AI should augment human capabilities, not replace them."
                .to_string(),
        ],
        links: vec![link("Resume", "#"), link("GitHub", "#"), link("LinkedIn", "#")],
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "AI Lawyer",
            "PDF-based legal chatbot using LangChain + Groq for constitutional law queries",
            &["LangChain", "Groq API", "FAISS", "Streamlit"],
        )
        .with_blog("#"),
        Project::new(
            "LLM Consolidator",
            "Compare outputs from OpenAI vs Gemini vs DeepSeek with unified interface",
            &["OpenAI", "Gemini", "DeepSeek", "OpenRouter", "Flask"],
        ),
        Project::new(
            "GSTR Tool",
            "Purchase Register reconciliation automation using pandas and ML",
            &["Pandas", "Python", "Selenium", "TensorFlow"],
        ),
        Project::new(
            "MCQ Generator",
            "LLM prompt-powered constitutional law quiz builder with adaptive difficulty",
            &["Prompt Engineering", "NLP", "React", "Node.js"],
        )
        .with_blog("#"),
    ]
}

fn default_skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        Skill::new("LangChain", "🔗", AiMl),
        Skill::new("FAISS", "🔍", AiMl),
        Skill::new("Groq API", "⚡", AiMl),
        Skill::new("OpenAI", "🤖", AiMl),
        Skill::new("Prompt Engineering", "💭", AiMl),
        Skill::new("NLP", "📝", AiMl),
        Skill::new("BiLSTM", "🧠", AiMl),
        Skill::new("TensorFlow", "🔥", AiMl),
        Skill::new("Streamlit", "🚀", Frontend),
        Skill::new("Flask", "🌶️", Backend),
        Skill::new("Selenium", "🕷️", Automation),
        Skill::new("Git", "📚", Tools),
        Skill::new("VSCode", "💻", Tools),
        Skill::new("Pandas", "🐼", Data),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_showcase_content() {
        let showcase = Showcase::default();
        assert_eq!(showcase.projects.len(), 4);
        assert_eq!(showcase.skills.len(), 14);
        assert!(showcase.projects[0].blog.is_some());
        assert!(showcase.projects[1].blog.is_none());
    }

    #[test]
    fn test_skills_grouped_in_category_order() {
        let showcase = Showcase::default();
        let groups = showcase.skills_by_category();

        let order: Vec<SkillCategory> = groups.keys().copied().collect();
        assert_eq!(order, SkillCategory::ALL.to_vec());
        assert_eq!(groups[&SkillCategory::AiMl].len(), 8);
        assert_eq!(groups[&SkillCategory::Tools].len(), 2);
    }

    #[test]
    fn test_category_serializes_with_label() {
        let json = serde_json::to_string(&SkillCategory::AiMl).unwrap();
        assert_eq!(json, "\"AI/ML\"");
    }
}
