//! Infrastructure adapters: HTTP transport, token persistence, telemetry.

pub mod error;
pub mod http;
pub mod telemetry;
pub mod token_file;
