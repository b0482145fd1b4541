//! # Runtime Configuration Service
//!
//! Hands the frontend the connection details of the hosted record store, so
//! one frontend build can be pointed at any store by configuring the host.
//!
//! ## Sub-modules:
//! - `get`: Returns the store configuration as JSON.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the configuration endpoint.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns a `StoreConfig` (`url`, `anon_key`, `table`) when the
///       store has been configured, or `503 Service Unavailable` with a plain-text reason.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
