//! Throw-away registry stub for integration tests
//!
//! Serves canned JSON bodies keyed by request path on a loopback port and
//! records every path it was asked for.

#![allow(dead_code)]

use async_trait::async_trait;
use registry_sync::{ImageTransfer, Result, SyncError, TransferOutcome, TransferTask};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Clone, Debug)]
pub struct Route {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            headers: Vec::new(),
            delay: None,
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct StubRegistry {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubRegistry {
    pub async fn start(routes: Vec<(&str, Route)>) -> Self {
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| (path.to_string(), route))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = listener.local_addr().unwrap().to_string();

        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    let _ = handle(stream, routes, seen).await;
                });
            }
        });

        Self { endpoint, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    mut stream: TcpStream,
    routes: Arc<HashMap<String, Route>>,
    seen: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(path.clone());

    let route = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Route::json(r#"{"errors":[{"code":"NAME_UNKNOWN"}]}"#).status(404));

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let mut response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for (name, value) in &route.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(&route.body);

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

/// Transfer double that records every task and can fail on one of them
#[derive(Default)]
pub struct RecordingTransfer {
    pub seen: Mutex<Vec<(String, String)>>,
    pub fail_on: Option<(String, String)>,
}

impl RecordingTransfer {
    pub fn failing_on(repository: &str, tag: &str) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            fail_on: Some((repository.to_string(), tag.to_string())),
        }
    }

    pub fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageTransfer for RecordingTransfer {
    async fn copy(&self, task: &TransferTask) -> Result<TransferOutcome> {
        let key = (task.repository.clone(), task.tag.clone());
        self.seen.lock().unwrap().push(key.clone());
        if self.fail_on.as_ref() == Some(&key) {
            return Err(SyncError::Transfer {
                reference: task.source_ref().docker_uri(),
                code: Some(1),
            });
        }
        Ok(TransferOutcome::succeeded())
    }
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(r, t)| (r.to_string(), t.to_string()))
        .collect()
}
