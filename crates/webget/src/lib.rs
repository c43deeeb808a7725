#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

use eyre::{Context, Result};
use std::{
    io::{Read, Write},
    net::{TcpStream, ToSocketAddrs},
};
use webget_common::{Url, format_request};

/// Max number of bytes a single read can hand back.
const BUFSIZE: usize = 4096;

/// A single-shot HTTP/1.1 GET exchange over a blocking transport.
///
/// Generic over the transport so tests can drive it with in-memory streams;
/// the real flow uses a [`TcpStream`] from [`connect`].
pub struct Webget<S> {
    stream: S,
}

impl<S: Read + Write> Webget<S> {
    /// Creates a new Webget instance over the provided transport.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use webget::Webget;
    /// use webget_common::Url;
    ///
    /// # fn main() -> eyre::Result<()> {
    /// let url = Url::parse("example.com:80/index.html")?;
    /// let mut client = Webget::new(webget::connect(&url)?);
    /// client.get(&url)?;
    /// client.stream_response(&mut std::io::stdout().lock())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Consumes the client, returning the underlying transport.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Formats and writes the GET request for `url`.
    pub fn get(&mut self, url: &Url) -> Result<()> {
        let request = format_request(url);
        trace!(len = request.len(), "sending request");
        self.stream.write_all(request.as_bytes()).wrap_err("failed to send request")?;
        self.stream.flush()?;
        Ok(())
    }

    /// Streams the response to `out` until end-of-stream, returning the total
    /// number of bytes received.
    ///
    /// A zero-byte read means the server is done; the bytes pass through
    /// unmodified, with no assumption that they are valid UTF-8.
    pub fn stream_response(&mut self, out: &mut impl Write) -> Result<u64> {
        let mut buf = [0u8; BUFSIZE];
        let mut total = 0u64;
        loop {
            let n = self.stream.read(&mut buf).wrap_err("failed to read response")?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
            total += n as u64;
            trace!(chunk = n, total, "received");
        }
        out.flush()?;
        Ok(total)
    }
}

/// Resolves `url`'s authority and connects to the first address that accepts.
pub fn connect(url: &Url) -> Result<TcpStream> {
    let authority = url.authority();
    let addrs = authority
        .to_socket_addrs()
        .wrap_err_with(|| format!("could not resolve `{authority}`"))?;

    let mut last_err = None;
    for addr in addrs {
        trace!(%addr, "dialing");
        match TcpStream::connect(addr) {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            }
            Err(err) => last_err = Some(err),
        }
    }
    match last_err {
        Some(err) => Err(err).wrap_err_with(|| format!("could not connect to `{authority}`")),
        None => eyre::bail!("`{authority}` did not resolve to any address"),
    }
}

/// Connects to `url`, performs the GET and streams the response to `out`.
///
/// This is the whole program: one request, one response, connection closed.
pub fn fetch(url: &Url, out: &mut impl Write) -> Result<u64> {
    let mut client = Webget::new(connect(url)?);
    client.get(url)?;
    client.stream_response(out)
}
