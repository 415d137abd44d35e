#[path = "../src/brain/mod.rs"]
mod brain;
#[path = "../src/keys/mod.rs"]
mod keys;
#[path = "../src/oracle/mod.rs"]
mod oracle;
#[path = "../src/parse/mod.rs"]
mod parse;
#[path = "../src/prompt/mod.rs"]
mod prompt;
#[path = "../src/rank/mod.rs"]
mod rank;

use brain::{Brain, BrainConfig, BrainError, RequestBuilder};
use keys::CredentialPool;
use oracle::{Fault, Oracle};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::fmt;

/// Initialize tracing subscriber for tests
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    });
}

/// Serve one canned HTTP response and capture the raw request
async fn serve_once(status: &'static str, body: &'static str) -> (String, Arc<Mutex<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(String::new()));
    let sink = captured.clone();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then as much body as Content-Length announces
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let length = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let lower = l.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + length {
                    break;
                }
            }
        }
        *sink.lock().unwrap() = String::from_utf8_lossy(&raw).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{}", addr), captured)
}

fn brain_for(endpoint: String) -> Brain {
    init_tracing();
    Brain::new(BrainConfig {
        endpoint,
        model: "gemini-test".to_string(),
        request_timeout_secs: 5,
        max_output_tokens: 256,
    })
    .expect("Failed to create Brain")
}

fn json_request() -> brain::GenerateRequest {
    RequestBuilder::new("gemini-test")
        .system("Bạn là người kể chuyện.")
        .user_text("Tu luyện")
        .temperature(0.9)
        .json_output(true)
        .build()
        .unwrap()
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let (endpoint, captured) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"description\":\"ok\",\"powerGained\":2}"}]},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":12,"candidatesTokenCount":8},"modelVersion":"gemini-test-001"}"#,
        )
        .await;
        let brain = brain_for(endpoint);

        let text = brain.generate("k1", &json_request()).await.unwrap();
        assert_eq!(text, r#"{"description":"ok","powerGained":2}"#);

        let raw = captured.lock().unwrap().clone();
        assert!(raw.starts_with("POST /v1beta/models/gemini-test:generateContent"));
        assert!(raw.to_ascii_lowercase().contains("x-goog-api-key: k1"));
        assert!(raw.contains("\"responseMimeType\":\"application/json\""));
        assert!(raw.contains("\"systemInstruction\""));
    }

    #[tokio::test]
    async fn test_rate_limit_surfaces_status() {
        let (endpoint, _) = serve_once(
            "429 Too Many Requests",
            r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#,
        )
        .await;
        let brain = brain_for(endpoint);

        let err = brain.generate("k1", &json_request()).await.unwrap_err();
        match &err {
            BrainError::Api { status, reason, .. } => {
                assert_eq!(*status, 429);
                assert_eq!(reason, "RESOURCE_EXHAUSTED");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_server_error_without_envelope() {
        let (endpoint, _) = serve_once("503 Service Unavailable", "upstream down").await;
        let brain = brain_for(endpoint);

        let err = brain.generate("k1", &json_request()).await.unwrap_err();
        match err {
            BrainError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_request_is_invalid_request() {
        let (endpoint, _) = serve_once(
            "400 Bad Request",
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;
        let brain = brain_for(endpoint);

        let err = brain.generate("bad", &json_request()).await.unwrap_err();
        assert!(matches!(err, BrainError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_blank_candidate_is_returned_as_text() {
        let (endpoint, _) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"  "}]},"finishReason":"SAFETY"}]}"#,
        )
        .await;
        let brain = brain_for(endpoint);

        let text = brain.generate("k1", &json_request()).await.unwrap();
        assert!(text.trim().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_reply_is_unusable_not_a_fault() {
        let (endpoint, _) = serve_once("200 OK", r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).await;
        let oracle = Oracle::new(brain_for(endpoint), CredentialPool::new(["k"]).shared());

        assert_eq!(oracle.cultivate("A", 5).await, Ok(None));
    }

    #[tokio::test]
    async fn test_unreachable_url_digits_do_not_look_rate_limited() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let brain = Brain::new(BrainConfig {
            endpoint: format!("http://{}/429", addr),
            model: "gemini-429".to_string(),
            request_timeout_secs: 5,
            max_output_tokens: 256,
        })
        .unwrap();
        let oracle = Oracle::new(brain, CredentialPool::new(["k"]).shared());

        let result = oracle.cultivate("A", 5).await;
        assert!(matches!(result, Err(Fault::Transient(_))), "got {:?}", result);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Bind then drop so the port is closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let brain = brain_for(format!("http://{}", addr));
        let err = brain.generate("k1", &json_request()).await.unwrap_err();
        assert!(matches!(err, BrainError::NetworkError(_)));
    }
}
