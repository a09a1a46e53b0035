//! canned-response http server for exercising the service clients over a
//! real socket. each accepted connection consumes one [`Reply`] in order.

use reqwest::blocking::Client;
use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

pub enum Reply {
    /// answer with a status code and a JSON body
    Status(u16, String),
    /// read the request, then close the connection without answering
    Hangup,
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn start(replies: Vec<Reply>) -> TestServer {
        let listener =
            TcpListener::bind("127.0.0.1:0").expect("test invariant failed: bind localhost");
        let address = listener
            .local_addr()
            .expect("test invariant failed: listener address");
        let requests = Arc::new(Mutex::new(vec![]));
        let recorded = requests.clone();
        thread::spawn(move || {
            for reply in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let head = read_head(&mut stream);
                recorded
                    .lock()
                    .expect("test invariant failed: request log poisoned")
                    .push(head);
                if let Reply::Status(status, body) = reply {
                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
            }
        });
        TestServer {
            base_url: format!("http://{address}"),
            requests,
        }
    }

    /// request line and headers of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("test invariant failed: request log poisoned")
            .clone()
    }
}

/// client that talks to the loopback server directly, ignoring proxy
/// settings from the environment.
pub fn test_client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("test invariant failed: build client")
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut head = vec![];
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buffer[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
