use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use super::api::api_base_url;

/// Mirrors log lines to the browser console and forwards them to the
/// backend, which writes them into the server log.
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::forward("info", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::forward("warn", component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::forward("error", component, message);
    }

    fn forward(level: &str, component: &str, message: &str) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };
        let url = format!("{}/api/logs", api_base_url());

        // Fire and forget
        spawn_local(async move {
            if let Ok(request) = Request::post(&url).json(&entry) {
                let _ = request.send().await;
            }
        });
    }
}
