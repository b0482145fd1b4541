//! HTTP access to the hosted record store and to the host's runtime config.

mod client;
mod error;

pub use client::{load_config, StudentStore};
pub use error::StoreError;
