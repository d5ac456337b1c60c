//! Request helpers.
//!
//! - [`extract_host`] - Host resolution for generated links
//! - [`short_url`] - Short URL scheme and formatting

pub mod extract_host;
pub mod short_url;
