//! Test-only text generator that records requests and replays a scripted outcome.

use std::sync::Mutex;

use crate::gemini::{GeminiClient, GenerateRequest, TextGenerator};

pub enum Reply {
    Text(String),
    Fail(String),
}

pub struct MockGenerator {
    reply: Reply,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

/// Bind a local port that answers one HTTP request with `status` and `body`.
///
/// Returns the endpoint base URL and a handle resolving to the raw request.
pub async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/v1beta", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (endpoint, handle)
}

/// True once the headers and the full `Content-Length` body have arrived.
fn request_complete(raw: &[u8]) -> bool {
    let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let content_length = String::from_utf8_lossy(&raw[..header_end])
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

/// An endpoint on a port nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1beta", addr)
}

/// A Gemini client for a loopback endpoint, bypassing any proxy settings.
pub fn local_client(endpoint: String) -> GeminiClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    GeminiClient::with_client(endpoint, client)
}
