//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with one canned status and body, and records the request
//! target so tests can check the query string that was sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub reason: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            body: Vec::new(),
        }
    }
}

pub struct WordServer {
    /// Words endpoint on the server, e.g. "http://127.0.0.1:12345/word".
    pub base_url: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl WordServer {
    /// Request targets (path and query) seen so far, in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(reply: Reply) -> WordServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let targets = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&targets);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = reply.clone();
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &reply, &seen));
        }
    });
    WordServer {
        base_url: format!("http://127.0.0.1:{}/word", port),
        targets,
    }
}

/// A url on a port nothing listens on, for connection failures.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/word", port)
}

fn handle(mut stream: TcpStream, reply: &Reply, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    if let Some(target) = request.lines().next().and_then(|line| line.split(' ').nth(1)) {
        seen.lock().unwrap().push(target.to_owned());
    }

    let head = if reply.status == 204 {
        format!("HTTP/1.1 {} {}\r\nConnection: close\r\n\r\n", reply.status, reply.reason)
    } else {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            reply.status,
            reply.reason,
            reply.body.len()
        )
    };
    let _ = stream.write_all(head.as_bytes());
    if reply.status != 204 {
        let _ = stream.write_all(&reply.body);
    }
    let _ = stream.flush();
}
