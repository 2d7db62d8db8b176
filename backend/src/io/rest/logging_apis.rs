use axum::{extract::State, response::Json};
use tracing::{debug, error, info, warn};

use crate::AppState;
use shared::{LogEntry, LogResponse};

/// Forward a frontend log line into the server log at the requested level
pub async fn log_message(State(_app_state): State<AppState>, Json(entry): Json<LogEntry>) -> Json<LogResponse> {
    let component = entry.component.as_deref().unwrap_or("frontend");

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!(component = component, "{}", entry.message),
        "warn" => warn!(component = component, "{}", entry.message),
        "error" => error!(component = component, "{}", entry.message),
        _ => info!(component = component, "{}", entry.message),
    }

    Json(LogResponse { success: true })
}
