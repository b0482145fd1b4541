use serde::{Deserialize, Serialize};

/// Table holding the student records when none is configured.
pub const DEFAULT_TABLE: &str = "alunos";

/// Connection details for the hosted record store.
///
/// The backend reads these from its configuration and hands them to the
/// frontend through `GET /api/config`. `anon_key` is the public client key of
/// the hosted service, not a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted service, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}
