use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    chat::{
        dto::{ChatRequest, ChatResponse, MentorProfile, MentorRequest, MentorResponse},
        mood,
    },
    error::AppError,
    state::AppState,
};

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/sentiment", post(mentor))
}

/// Rule-based chat: classify the message and return the canned reply set.
#[instrument(skip(payload))]
pub async fn chat(Json(payload): Json<ChatRequest>) -> Json<ChatResponse> {
    let mood = mood::classify(&payload.message);
    info!(mood = ?mood, "message classified");
    Json(ChatResponse {
        mood,
        replies: mood::replies(mood).to_vec(),
    })
}

/// LLM mentor: one system + one user message out, first completion text back.
#[instrument(skip(state, payload))]
pub async fn mentor(
    State(state): State<AppState>,
    Json(payload): Json<MentorRequest>,
) -> Result<Json<MentorResponse>, AppError> {
    let system = mentor_prompt(&payload.user);
    let reply = state
        .llm
        .complete(&system, &payload.message)
        .await
        .map_err(|e| {
            warn!(error = %e, "chat completion failed");
            AppError::Upstream(e.to_string())
        })?;
    Ok(Json(MentorResponse { reply }))
}

/// System instruction embedding the profile fields verbatim.
fn mentor_prompt(user: &MentorProfile) -> String {
    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    format!(
        "You are SentiBot, a friendly career mentor chatbot.\n\
         Personalize every reply using the user's profile:\n\n\
         Name: {}\n\
         City: {}\n\
         Skills: {}\n\
         Experience: {}\n\
         Qualification: {}\n\
         Career Goal: {}\n\n\
         Always respond in a warm, short, supportive, helpful tone.",
        field(&user.name),
        field(&user.city),
        field(&user.skills),
        field(&user.experience),
        field(&user.qualification),
        field(&user.career_goal),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chat_returns_mood_and_replies() {
        let Json(resp) = chat(Json(ChatRequest {
            message: "I feel so sad and lonely".into(),
        }))
        .await;
        assert_eq!(resp.mood, mood::Mood::Sad);
        assert!(resp.replies[0].starts_with("I'm really sorry"));
        assert!(resp.replies.iter().any(|r| r.contains("1800-599-0019")));
    }

    #[tokio::test]
    async fn chat_neutral_returns_two_replies() {
        let Json(resp) = chat(Json(ChatRequest {
            message: "what's the weather".into(),
        }))
        .await;
        assert_eq!(resp.mood, mood::Mood::Neutral);
        assert_eq!(resp.replies.len(), 2);
    }

    #[tokio::test]
    async fn mentor_relays_completion_text() {
        let state = AppState::fake();
        let result = mentor(
            State(state),
            Json(MentorRequest {
                message: "How do I switch careers?".into(),
                user: MentorProfile {
                    name: Some("Asha".into()),
                    ..Default::default()
                },
            }),
        )
        .await
        .expect("mentor should succeed with fake model");
        assert_eq!(result.0.reply, "stub reply");
    }

    #[test]
    fn prompt_embeds_profile_fields_verbatim() {
        let prompt = mentor_prompt(&MentorProfile {
            name: Some("Asha".into()),
            city: Some("Pune".into()),
            skills: Some("rust, sql".into()),
            ..Default::default()
        });
        assert!(prompt.contains("Name: Asha"));
        assert!(prompt.contains("City: Pune"));
        assert!(prompt.contains("Skills: rust, sql"));
        assert!(prompt.contains("Career Goal: \n"));
    }
}
