//! Application layer services.
//!
//! Services consume the store trait and give HTTP handlers and the admin CLI
//! one place where the shorten/resolve rules live.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
