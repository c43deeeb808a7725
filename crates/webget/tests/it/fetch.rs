use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};
use webget_common::Url;

/// Serves one canned response on an ephemeral port.
///
/// Returns the port and a handle yielding the request bytes the server saw.
/// The server reads until the blank line ending the request head, writes the
/// response, and closes the connection, which is what signals end-of-response
/// to the client.
fn serve_once(response: Vec<u8>) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = vec![0u8; 4096];
        let mut read = 0;
        loop {
            let n = stream.read(&mut request[read..]).unwrap();
            read += n;
            if n == 0 || request[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        request.truncate(read);
        stream.write_all(&response).unwrap();
        request
    });
    (port, handle)
}

#[test]
fn fetches_and_streams_response() {
    let response = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello";
    let (port, server) = serve_once(response.to_vec());

    let url = Url::parse(&format!("127.0.0.1:{port}/index.html")).unwrap();
    let mut out = Vec::new();
    let total = webget::fetch(&url, &mut out).unwrap();

    assert_eq!(total, response.len() as u64);
    assert_eq!(out, response);

    let request = String::from_utf8(server.join().unwrap()).unwrap();
    similar_asserts::assert_eq!(
        request,
        format!("GET /index.html HTTP/1.1\r\nHost: 127.0.0.1:{port}\r\nConnection: close\r\n\r\n")
    );
}

#[test]
fn scheme_is_stripped_before_dialing() {
    let (port, server) = serve_once(b"HTTP/1.1 204 No Content\r\n\r\n".to_vec());

    let url = Url::parse(&format!("http://127.0.0.1:{port}/x")).unwrap();
    let mut out = Vec::new();
    webget::fetch(&url, &mut out).unwrap();

    let request = String::from_utf8(server.join().unwrap()).unwrap();
    assert!(request.starts_with("GET /x HTTP/1.1\r\n"), "{request:?}");
}

#[test]
fn bare_host_requests_root() {
    let (port, server) = serve_once(b"HTTP/1.1 200 OK\r\n\r\n".to_vec());

    let url = Url::parse(&format!("127.0.0.1:{port}")).unwrap();
    let mut out = Vec::new();
    webget::fetch(&url, &mut out).unwrap();

    let request = String::from_utf8(server.join().unwrap()).unwrap();
    assert!(request.starts_with("GET / HTTP/1.1\r\n"), "{request:?}");
}

#[test]
fn streams_binary_body_verbatim() {
    // A body with NUL bytes and invalid UTF-8, larger than the read buffer.
    let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
    response.extend((0..100_000).map(|i| (i % 256) as u8));
    let (port, server) = serve_once(response.clone());

    let url = Url::parse(&format!("127.0.0.1:{port}/blob")).unwrap();
    let mut out = Vec::new();
    let total = webget::fetch(&url, &mut out).unwrap();

    assert_eq!(total, response.len() as u64);
    assert_eq!(out, response);
    server.join().unwrap();
}

#[test]
fn refused_connection_reports_the_authority() {
    // Bind and immediately drop a listener to get a port nothing listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let url = Url::parse(&format!("127.0.0.1:{port}/")).unwrap();
    let err = webget::fetch(&url, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains(&format!("127.0.0.1:{port}")), "{err}");
}
