//! HTTP API layer.
//!
//! Translates requests into [`crate::application::services::LinkService`]
//! calls and renders plain-text responses.
//!
//! - [`dto`] - Form and JSON payloads
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Access log, metrics and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
