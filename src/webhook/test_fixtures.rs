//! Shared test fixtures for exercising real HTTP exchanges.
//!
//! [`OneShotServer`] accepts a single connection on localhost, records the
//! request and replies with a canned response. It runs on a plain thread
//! so it works under both async tests and the blocking facade.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use super::{ReqwestClient, WebhookClient};

/// Token segment of every fixture URL; must never show up in errors.
pub const WEBHOOK_TOKEN: &str = "Zq8vTOKENk3W";

/// A request as received by the test server.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Returns the first header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// Server answering exactly one request with a canned response.
pub struct OneShotServer {
    url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    /// Starts the server. `headers` are added to the response verbatim.
    pub fn start(status: u16, headers: &[(&str, &str)], body: impl Into<Vec<u8>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/hooks/123/{WEBHOOK_TOKEN}",
            listener.local_addr().unwrap()
        );

        let mut head = format!("HTTP/1.1 {status} Canned\r\nConnection: close\r\n");
        for (name, value) in headers {
            head.push_str(&format!("{name}: {value}\r\n"));
        }
        let body = body.into();
        if status != 204 {
            head.push_str(&format!("Content-Length: {}\r\n", body.len()));
        }
        head.push_str("\r\n");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut BufReader::new(stream.try_clone().unwrap()));

            // The client may hang up after reading a truncated body
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
            request
        });

        Self { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Waits for the exchange and returns what the server received.
    pub fn finish(self) -> CapturedRequest {
        self.handle.join().unwrap()
    }
}

fn read_request(reader: &mut impl BufRead) -> CapturedRequest {
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line).unwrap();
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let len = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, v)| v.parse::<usize>().unwrap());
    let mut body = vec![0; len];
    reader.read_exact(&mut body).unwrap();

    CapturedRequest {
        method,
        path,
        headers,
        body,
    }
}

/// A reqwest client that ignores proxy environment variables.
pub fn direct_client() -> ReqwestClient {
    ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

/// A webhook client talking directly to localhost.
pub fn direct_webhook() -> WebhookClient {
    WebhookClient::with_client(direct_client())
}

/// A URL on localhost where nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hooks/123/{WEBHOOK_TOKEN}")
}

/// Renders an error together with its whole source chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = format!("{err} / {err:?}");
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(&format!(" / {cause} / {cause:?}"));
        source = cause.source();
    }
    rendered
}
