//! Local keyword responder
//!
//! Answers chat messages from a fixed table so the site works without an
//! external chat service. The first keyword contained in the lowercased
//! message wins; anything else gets the default answer.

use async_trait::async_trait;
use portfolio_application::ports::chat_backend::{ChatBackend, ChatBackendError};
use serde_json::{Value, json};

const RESPONSES: &[(&str, &str)] = &[
    (
        "resume",
        "I'm an AI developer with experience in LangChain, RAG systems, and legal tech. \
         Currently interning at Astron Financials, working on automation and ML projects. \
         I've built several AI tools including legal chatbots and LLM comparison platforms.",
    ),
    (
        "projects",
        "I've worked on AI Lawyer (legal chatbot), LLM Consolidator (model comparison), \
         GSTR Tool (financial automation), and MCQ Generator (educational AI). Each project \
         showcases different aspects of AI/ML development.",
    ),
    (
        "langchain",
        "LangChain is my go-to framework for building AI applications. I've used it \
         extensively in my AI Lawyer project to create RAG systems that can query legal \
         documents and provide contextual answers.",
    ),
    (
        "tensorflow",
        "Honestly, I prefer PyTorch for research and experimentation, but TensorFlow for \
         production. TensorFlow's ecosystem is more mature for deployment, especially with \
         TensorFlow Serving.",
    ),
    (
        "pytorch",
        "PyTorch is my favorite for rapid prototyping and research. The dynamic computation \
         graph makes debugging much easier, and the community is fantastic.",
    ),
    (
        "internship",
        "At Astron Financials, I'm working on automating financial processes using ML and \
         building tools for data reconciliation. It's been great applying AI to real-world \
         financial problems.",
    ),
    (
        "easteregg",
        "🎉 You found it! Here's a secret: I once trained a model to predict which coffee \
         shop has the shortest queue. It was 73% accurate, but by the time I got there, the \
         queue had changed. Classic ML problem! ☕",
    ),
];

const DEFAULT_RESPONSE: &str = "That's an interesting question! I'm still learning about \
     Kurian's work. Try asking about his resume, projects, LangChain experience, or his \
     current internship at Astron Financials.";

/// Chat backend that never leaves the process
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedChatBackend;

impl CannedChatBackend {
    pub fn new() -> Self {
        Self
    }

    /// Pick the answer for a message
    pub fn respond(&self, message: &str) -> &'static str {
        let lower = message.to_lowercase();
        RESPONSES
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, response)| *response)
            .unwrap_or(DEFAULT_RESPONSE)
    }
}

#[async_trait]
impl ChatBackend for CannedChatBackend {
    async fn forward(&self, body: &Value) -> Result<Value, ChatBackendError> {
        let message = body.get("message").and_then(Value::as_str).unwrap_or_default();
        Ok(json!({ "reply": self.respond(message) }))
    }

    fn describe(&self) -> String {
        "canned (built-in responses)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let backend = CannedChatBackend::new();
        assert!(backend.respond("Tell me about your PROJECTS").starts_with("I've worked on"));
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        let backend = CannedChatBackend::new();
        // "tensorflow" comes before "pytorch" in the table
        let reply = backend.respond("pytorch or tensorflow?");
        assert!(reply.starts_with("Honestly"));
    }

    #[test]
    fn test_unknown_message_gets_default() {
        assert_eq!(CannedChatBackend::new().respond("hello"), DEFAULT_RESPONSE);
    }

    #[tokio::test]
    async fn test_forward_wraps_reply() {
        let reply = CannedChatBackend::new()
            .forward(&json!({"message": "internship?"}))
            .await
            .unwrap();
        assert!(reply["reply"].as_str().unwrap().starts_with("At Astron"));
    }
}
