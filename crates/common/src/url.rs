//! Tokenizing of simplified `[scheme://]hostname[:port]/path` URLs.

use std::{fmt, str::FromStr};

/// Default port for `http://` and scheme-less URLs.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Default port for `https://` URLs.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// The three pieces of a simplified URL.
///
/// `path` is stored without its leading slash;
/// [`format_request`](crate::format_request) reinstates it when building the
/// request line, so an empty path requests `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    /// Hostname or IPv4 address, without the port.
    pub host: String,
    /// TCP port, defaulted from the scheme when the URL carries none.
    pub port: u16,
    /// Everything after the first `/` of the path, possibly empty. Query text
    /// rides along as opaque path bytes.
    pub path: String,
}

/// Errors when tokenizing a URL.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// The URL was empty, or empty after stripping its scheme.
    #[error("empty URL")]
    Empty,
    /// A scheme other than `http` or `https`.
    #[error("unsupported scheme `{0}`")]
    UnsupportedScheme(String),
    /// The authority had no hostname before the port.
    #[error("missing hostname in `{0}`")]
    MissingHost(String),
    /// The port was empty, non-numeric or out of range. Also raised for IPv6
    /// literals, which the `host:port` split cannot express.
    #[error("invalid port in `{0}`")]
    InvalidPort(String),
}

impl Url {
    /// Tokenizes the given URL into hostname, port and path.
    ///
    /// A leading `http://` or `https://` is stripped, the text up to the first
    /// `/` is split into `host[:port]`, and the rest is kept verbatim as the
    /// path. The port defaults to [`DEFAULT_HTTP_PORT`] or
    /// [`DEFAULT_HTTPS_PORT`] according to the scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use webget_common::Url;
    ///
    /// let url = Url::parse("http://example.com/index.html")?;
    /// assert_eq!(url.host, "example.com");
    /// assert_eq!(url.port, 80);
    /// assert_eq!(url.path, "index.html");
    /// # Ok::<(), webget_common::url::UrlError>(())
    /// ```
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let (scheme, rest) = match url.split_once("://") {
            Some((scheme @ ("http" | "https"), rest)) => (Some(scheme), rest),
            Some((scheme, _)) => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
            None => (None, url),
        };
        if rest.is_empty() {
            return Err(UrlError::Empty);
        }

        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| UrlError::InvalidPort(authority.to_string()))?;
                (host, port)
            }
            None => {
                let port =
                    if scheme == Some("https") { DEFAULT_HTTPS_PORT } else { DEFAULT_HTTP_PORT };
                (authority, port)
            }
        };
        if host.is_empty() {
            return Err(UrlError::MissingHost(url.to_string()));
        }

        Ok(Self { host: host.to_string(), port, path: path.to_string() })
    }

    /// The `host:port` pair in the form accepted by
    /// [`ToSocketAddrs`](std::net::ToSocketAddrs).
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.path)
    }
}
