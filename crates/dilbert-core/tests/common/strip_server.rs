//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses keyed by request path. Unknown paths get 404.
//! Every connection is closed after one response.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: "200 OK",
            headers: vec![("Content-Type", content_type.to_string())],
            body: body.into(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 Found",
            headers: vec![
                ("Location", location.to_string()),
                ("Content-Type", "text/html".to_string()),
            ],
            body: b"<html>moved</html>".to_vec(),
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// Handle to a running server. Records every requested path.
pub struct StripServer {
    pub base: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl StripServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. The base URL has no trailing
/// slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&str, Canned)>) -> StripServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Canned>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, c)| (p.to_string(), c))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    StripServer {
        base: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

/// A port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Canned>,
    hits: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    hits.lock().unwrap().push(path.to_string());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let not_found = Canned::status("404 Not Found");
    let canned = routes.get(path).unwrap_or(&not_found);
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        canned.status,
        canned.body.len()
    );
    for (name, value) in &canned.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&canned.body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
