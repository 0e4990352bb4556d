use std::{
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpListener},
    thread::{self, JoinHandle},
};

/// A single-request HTTP server bound to a loopback port.
///
/// The server answers the first request with the configured status and body,
/// then exits. Joining the handle yields the request line it received.
pub struct OneShotServer {
    pub base_url: String,
    pub handle: JoinHandle<String>,
}

/// Serve one HTTP response carrying `body` as JSON.
pub fn serve_once(status_line: &'static str, body: String) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .unwrap_or_else(|err| panic!("failed to bind loopback listener: {err}"));
    let addr = local_addr(&listener);
    let handle = thread::spawn(move || {
        let (stream, _) = listener
            .accept()
            .unwrap_or_else(|err| panic!("failed to accept connection: {err}"));
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader
            .read_line(&mut request_line)
            .unwrap_or_else(|err| panic!("failed to read request line: {err}"));
        let mut header = String::new();
        while reader
            .read_line(&mut header)
            .unwrap_or_else(|err| panic!("failed to read request header: {err}"))
            > 2
        {
            header.clear();
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream
            .write_all(response.as_bytes())
            .unwrap_or_else(|err| panic!("failed to write response: {err}"));
        request_line.trim_end().to_owned()
    });
    OneShotServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// Bind a listener that accepts connections but never answers.
pub fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .unwrap_or_else(|err| panic!("failed to bind loopback listener: {err}"));
    let base_url = format!("http://{}", local_addr(&listener));
    (listener, base_url)
}

/// Base URL of a loopback port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .unwrap_or_else(|err| panic!("failed to bind loopback listener: {err}"));
    let addr = local_addr(&listener);
    drop(listener);
    format!("http://{addr}")
}

fn local_addr(listener: &TcpListener) -> SocketAddr {
    listener
        .local_addr()
        .unwrap_or_else(|err| panic!("failed to read listener address: {err}"))
}

