//! Core domain entities.
//!
//! - [`ShortLink`] - identifier → original URL mapping with a fixed TTL

pub mod short_link;

pub use short_link::{LINK_TTL, ShortLink};
