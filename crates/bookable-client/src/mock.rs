//! In-memory transport for tests.
//!
//! Responses are keyed by request path (URL minus scheme and host). Deferred
//! replies let a test decide when, and in which order, calls settle.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpRequest, HttpResponse, Transport};

enum Reply {
    Ready(ApiResult<HttpResponse>),
    Deferred(oneshot::Receiver<ApiResult<HttpResponse>>),
}

#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<String, VecDeque<Reply>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.push(path, Reply::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.push(path, Reply::Ready(Err(ApiError::new(message))));
    }

    /// Register a reply that stays pending until the returned sender fires
    pub fn defer(&self, path: &str) -> oneshot::Sender<ApiResult<HttpResponse>> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().iter().map(|r| path_of(&r.url).to_string()).collect()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, path: &str) -> Option<Reply> {
        let mut routes = self.routes.lock().unwrap();
        let queue = routes.get_mut(path)?;
        // A lone ready reply is reused so pages can reload the same path.
        match queue.front() {
            Some(Reply::Ready(result)) if queue.len() == 1 => Some(Reply::Ready(result.clone())),
            _ => queue.pop_front(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let path = path_of(&request.url).to_string();
        self.sent.lock().unwrap().push(request);
        match self.next_reply(&path) {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::new("mock reply dropped"))),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}

fn path_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| &url[i + 3..]).unwrap_or(url);
    after_scheme.find('/').map(|i| &after_scheme[i..]).unwrap_or("/")
}
