//! Outbound HTTP transport to the catalog REST API.

mod client;

pub use client::{ApiClient, ApiError};
