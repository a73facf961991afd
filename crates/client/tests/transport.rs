use std::collections::HashMap;
use std::net::SocketAddr;

use base64::{Engine, engine::general_purpose};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use paysign_client::config::BasicAuth;
use paysign_client::transport::{TransportError, send_request};

/// One-shot HTTP server: accepts a single connection, reads the full
/// request, responds with the given status line and body, and returns
/// the raw request bytes for inspection.
async fn spawn_server(
    status_line: &'static str,
    response_body: &'static str,
) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let request = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before full request");
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = header_end(&buf) {
                let head = String::from_utf8_lossy(&buf[..end]).to_string();
                let total = end + content_length(&head);
                if buf.len() >= total {
                    break String::from_utf8_lossy(&buf[..total]).to_string();
                }
            }
        };

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (addr, handle)
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn test_auth() -> BasicAuth {
    serde_json::from_str(r#"{"username": "merchant", "password": "api-pass"}"#).unwrap()
}

#[tokio::test]
async fn posts_signed_payload_with_basic_auth() {
    let (addr, server) = spawn_server("200 OK", r#"{"status":"accepted"}"#).await;
    let url = format!("http://{addr}/submit");

    let mut headers = HashMap::new();
    headers.insert("X-Request-Id".to_string(), "abc-123".to_string());

    let client = reqwest::Client::new();
    let response = send_request(
        &client,
        "POST",
        &url,
        &headers,
        r#"{"ORDERID":"42","token":"c2ln"}"#.to_string(),
        &test_auth(),
    )
    .await
    .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body, r#"{"status":"accepted"}"#);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /submit HTTP/1.1\r\n"));

    let credentials = general_purpose::STANDARD.encode("merchant:api-pass");
    assert!(request.to_lowercase().contains("authorization: basic"));
    assert!(request.contains(&format!("Basic {credentials}")));
    assert!(request.to_lowercase().contains("x-request-id: abc-123"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"ORDERID":"42","token":"c2ln"}"#));
}

#[tokio::test]
async fn non_2xx_status_is_a_transport_error() {
    let (addr, server) = spawn_server("402 Payment Required", "insufficient funds").await;
    let url = format!("http://{addr}/submit");

    let client = reqwest::Client::new();
    let error = send_request(
        &client,
        "POST",
        &url,
        &HashMap::new(),
        "{}".to_string(),
        &test_auth(),
    )
    .await
    .unwrap_err();

    match error {
        TransportError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 402);
            assert_eq!(body, "insufficient funds");
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn invalid_method_fails_before_any_request() {
    let client = reqwest::Client::new();
    let error = send_request(
        &client,
        "NOT A METHOD",
        "http://127.0.0.1:1/submit",
        &HashMap::new(),
        "{}".to_string(),
        &test_auth(),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, TransportError::Method(_)));
}

#[tokio::test]
async fn connection_failure_is_a_request_error() {
    // Port 1 is reserved and closed; the connection is refused.
    let client = reqwest::Client::new();
    let error = send_request(
        &client,
        "POST",
        "http://127.0.0.1:1/submit",
        &HashMap::new(),
        "{}".to_string(),
        &test_auth(),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, TransportError::Request { .. }));
}
