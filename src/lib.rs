//! Back-office client for the bilingual (Uzbek/Russian) industrial catalog.
//!
//! The remote REST API is the source of truth. This crate holds typed forms
//! and validation, a generic list/dialog controller per collection, the
//! singleton company profile, and a locally gated admin session.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
