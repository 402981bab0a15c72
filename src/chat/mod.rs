mod dto;
pub mod handlers;
pub mod llm;
pub mod mood;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::chat_routes()
}
