//! Application layer: resource controllers, session and notifications.

pub mod company;
pub mod dashboard;
pub mod error;
pub mod manager;
pub mod notify;
pub mod resource;
pub mod session;
