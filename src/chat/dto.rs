use serde::{Deserialize, Serialize};

use crate::chat::mood::Mood;

/// Request body for the rule-based chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of the rule-based chat endpoint: the detected mood and its
/// canned reply set, in presentation order.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub mood: Mood,
    pub replies: Vec<&'static str>,
}

/// Profile snapshot sent with a mentor request. All fields optional; absent
/// fields render as empty in the system prompt.
#[derive(Debug, Default, Deserialize)]
pub struct MentorProfile {
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub career_goal: Option<String>,
}

/// Request body for the LLM mentor endpoint.
#[derive(Debug, Deserialize)]
pub struct MentorRequest {
    pub message: String,
    #[serde(default)]
    pub user: MentorProfile,
}

#[derive(Debug, Serialize)]
pub struct MentorResponse {
    pub reply: String,
}
