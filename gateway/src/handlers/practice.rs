use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::middleware::SelectedPractice;
use crate::practice::PracticeConfig;
use crate::state::AppState;

/// Script loaded by the chat widget and the voice agent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantScript {
    pub practice_id: &'static str,
    pub assistant_name: &'static str,
    pub initial_message: &'static str,
    pub system_prompt: &'static str,
    pub first_message: &'static str,
}

impl From<&'static PracticeConfig> for AssistantScript {
    fn from(practice: &'static PracticeConfig) -> Self {
        Self {
            practice_id: practice.id,
            assistant_name: practice.chat.assistant_name,
            initial_message: practice.chat.initial_message,
            system_prompt: practice.chat.system_prompt,
            first_message: practice.voice.first_message,
        }
    }
}

/// `GET /api/practice`
pub async fn current_practice(
    Extension(SelectedPractice(practice)): Extension<SelectedPractice>,
) -> Json<&'static PracticeConfig> {
    Json(practice)
}

/// `GET /api/practices`
pub async fn list_practices(
    State(state): State<Arc<AppState>>,
) -> Json<&'static [&'static PracticeConfig]> {
    Json(state.registry.all())
}

/// `GET /api/practices/{id}`
pub async fn get_practice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<&'static PracticeConfig>> {
    debug!(practice_id = %id, "Practice lookup");
    state
        .registry
        .lookup(&id)
        .map(Json)
        .ok_or(AppError::PracticeNotFound { id })
}

/// `GET /api/practice/assistant`
pub async fn assistant_script(
    Extension(SelectedPractice(practice)): Extension<SelectedPractice>,
) -> Json<AssistantScript> {
    Json(AssistantScript::from(practice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::ARENA_FYSIO_AMSTERDAM;

    #[test]
    fn test_assistant_script_from_practice() {
        let script = AssistantScript::from(&ARENA_FYSIO_AMSTERDAM);
        assert_eq!(script.practice_id, "arena-fysio-amsterdam");
        assert_eq!(script.assistant_name, "Lara");
        assert_eq!(
            script.first_message,
            ARENA_FYSIO_AMSTERDAM.voice.first_message
        );

        let json = serde_json::to_value(&script).unwrap();
        for key in [
            "practiceId",
            "assistantName",
            "initialMessage",
            "systemPrompt",
            "firstMessage",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
