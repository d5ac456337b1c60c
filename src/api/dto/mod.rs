//! Request and response payloads.

pub mod health;
pub mod shorten;
