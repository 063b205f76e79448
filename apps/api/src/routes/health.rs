use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::model_client::ModelClient;
use crate::state::AppState;

/// GET /api/health
/// Always 200. A model-listing failure is reported inside the payload as a
/// string, never as an HTTP error.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let available_models = match state.model.list_models().await {
        Ok(names) => json!(names),
        Err(e) => {
            warn!("model listing failed: {e}");
            json!(format!("Error listing models: {e}"))
        }
    };

    Json(json!({
        "status": "healthy",
        "message": "ATS API is running",
        "available_models": available_models,
    }))
}
