// src/testutil.rs
// =============================================================================
// Minimal HTTP/1.1 server for tests.
//
// Serves canned responses keyed by request path, answers 404 for anything
// else, and records every requested path so tests can assert on network
// activity. One request per connection (Connection: close).
// =============================================================================

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

// status, body, Content-Length to announce
type Route = (u16, Vec<u8>, usize);

pub struct TestServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Starts a server serving `routes` as (path, status, body).
    pub fn start(routes: &[(&str, u16, &[u8])]) -> Self {
        let routes = routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_vec(), body.len())))
            .collect();
        Self::serve(routes)
    }

    /// Like `start`, but announces `declared` as Content-Length and closes
    /// the connection after the (shorter) body, simulating a dropped transfer.
    pub fn start_truncated(path: &str, declared: usize, body: &[u8]) -> Self {
        let mut routes = HashMap::new();
        routes.insert(path.to_string(), (200, body.to_vec(), declared));
        Self::serve(routes)
    }

    fn serve(routes: HashMap<String, Route>) -> Self {
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                thread::spawn(move || handle(stream, &routes, &recorded));
            }
        });

        Self {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:4567`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Client that ignores proxy environment variables, so loopback works.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    recorded.lock().unwrap().push(path.clone());

    let (status, body, declared) = routes
        .get(&path)
        .map(|(status, body, declared)| (*status, body.as_slice(), *declared))
        .unwrap_or((404, b"not found".as_slice(), 9));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        declared
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
