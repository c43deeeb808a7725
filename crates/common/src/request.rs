//! Raw HTTP/1.1 request formatting.

use crate::url::Url;

/// Formats the raw GET request for `url`: the request line plus the `Host`
/// and `Connection` headers, and nothing else.
///
/// `Connection: close` is what lets the reader treat end-of-stream as end of
/// response; without it many servers hold the socket open waiting for the
/// next request.
///
/// # Example
///
/// ```
/// use webget_common::{format_request, Url};
///
/// let url = Url::parse("example.com:8080/index.html")?;
/// assert_eq!(
///     format_request(&url),
///     "GET /index.html HTTP/1.1\r\nHost: example.com:8080\r\nConnection: close\r\n\r\n"
/// );
/// # Ok::<(), webget_common::url::UrlError>(())
/// ```
pub fn format_request(url: &Url) -> String {
    format!(
        "GET /{path} HTTP/1.1\r\nHost: {host}:{port}\r\nConnection: close\r\n\r\n",
        path = url.path,
        host = url.host,
        port = url.port,
    )
}
