//! Request vocabulary for the hosted record store.
//!
//! The store speaks the PostgREST dialect: rows live under
//! `{url}/rest/v1/{table}`, filters and ordering travel as query parameters,
//! and failures come back as a JSON body with a human-readable `message`.

use serde::Deserialize;

use crate::model::store::StoreConfig;

/// Column the list is ordered by, newest first.
pub const ORDER_COLUMN: &str = "data_criacao";

/// Base URL of the record table, without query parameters.
pub fn table_url(config: &StoreConfig) -> String {
    format!("{}/rest/v1/{}", config.url.trim_end_matches('/'), config.table)
}

/// Query parameters selecting every column ordered by creation time, newest first.
pub fn list_query() -> [(&'static str, String); 2] {
    [
        ("select", "*".to_string()),
        ("order", format!("{}.desc", ORDER_COLUMN)),
    ]
}

/// Query parameter restricting an update or delete to one row.
pub fn id_filter(id: &str) -> (&'static str, String) {
    ("id", format!("eq.{}", id))
}

/// Error body returned by the store on a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub message: Option<String>,
    pub code: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl ApiError {
    /// Extracts the message to show the user from a failed response.
    ///
    /// Prefers the JSON `message`, then the raw body text, then the status.
    pub fn describe(status: u16, body: &str) -> String {
        let parsed = serde_json::from_str::<ApiError>(body).ok();
        if let Some(message) = parsed
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
        {
            return message;
        }

        let body = body.trim();
        if !body.is_empty() && !body.starts_with('{') {
            return body.to_string();
        }

        format!("HTTP {}", status)
    }
}
