//! Public short URL construction.

use std::fmt;

/// Path prefix under which short links are served.
pub const SHORT_PATH_PREFIX: &str = "/s/";

/// Scheme used in generated short URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// `http` in development mode, `https` otherwise.
    pub fn for_dev_mode(dev_mode: bool) -> Self {
        if dev_mode { Self::Http } else { Self::Https }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `<scheme>://<host>/s/<id>`.
pub fn build_short_url(scheme: Scheme, host: &str, id: &str) -> String {
    format!("{}://{}{}{}", scheme, host, SHORT_PATH_PREFIX, id)
}
