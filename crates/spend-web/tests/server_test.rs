//! Loopback test: a real listener on an ephemeral port.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::Arc;

use spend_core::config::ServerConfig;
use spend_core::{CustomerRecord, SpendPredictor, SpendResult};
use spend_web::{App, PredictionService, Server};

struct Constant(f64);

impl SpendPredictor for Constant {
    fn predict(&self, _record: &CustomerRecord) -> SpendResult<f64> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "constant"
    }
}

fn start_server(max_body_bytes: usize) -> std::net::SocketAddr {
    let config = ServerConfig {
        bind: "127.0.0.1:0".into(),
        max_body_bytes,
        ..ServerConfig::default()
    };
    let app = App::new(PredictionService::new(Arc::new(Constant(1234.5))));
    let server = Server::bind(&config, app).unwrap();
    let addr = server.local_addr().unwrap();
    std::thread::spawn(move || server.run());
    addr
}

fn roundtrip(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(raw.as_bytes()).unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

#[test]
fn serves_json_prediction_over_tcp() {
    let addr = start_server(65_536);
    let body = serde_json::to_string(&CustomerRecord::default()).unwrap();
    let raw = format!(
        "POST /api/predict HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );

    let response = roundtrip(addr, &raw);
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Connection: close"));
    assert!(response.contains("\"formatted\":\"₹ 1,234.50\""));
}

#[test]
fn oversized_body_gets_413() {
    let addr = start_server(16);
    let raw = "POST /predict HTTP/1.1\r\nContent-Length: 1000\r\n\r\n";
    let response = roundtrip(addr, raw);
    assert!(response.starts_with("HTTP/1.1 413 Payload Too Large\r\n"));
}

#[test]
fn form_page_over_tcp() {
    let addr = start_server(65_536);
    let response = roundtrip(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Content-Type: text/html; charset=utf-8"));
    assert!(response.contains("<form method=\"post\" action=\"/predict\">"));
}
