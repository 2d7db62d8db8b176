use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{CreateExpenseRequest, ErrorResponse, Expense};

/// Prefix for every API URL. Empty when the backend also serves the
/// frontend; set `API_BASE_URL` at build time for a separate dev server.
pub fn api_base_url() -> String {
    option_env!("API_BASE_URL").unwrap_or_default().trim_end_matches('/').to_string()
}

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { base_url: api_base_url() }
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn expenses_url(&self) -> String {
        format!("{}/api/expenses", self.base_url)
    }

    /// Every stored expense
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, String> {
        match Request::get(&self.expenses_url()).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Failed to fetch expenses: {}", e)),
        }
    }

    /// Create an expense and return the stored record
    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<Expense, String> {
        let request = Request::post(&self.expenses_url())
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a success body, or surface the server's `{"error": ...}` message
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(error_message(status, &text))
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status))
}
