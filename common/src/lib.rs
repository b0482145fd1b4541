//! Types and pure logic shared by the student records frontend and its host.
//!
//! Nothing in here touches the network or the DOM, so everything can be unit
//! tested natively.

pub mod filter;
pub mod format;
pub mod model;
pub mod requests;
pub mod validation;
