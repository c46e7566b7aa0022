//! Domain layer: form schemas, wire payloads and list filtering.

pub mod error;
pub mod forms;
pub mod payload;
pub mod search;
