//! API Client
//!
//! Thin JSON wrapper over a `Transport`: resolves paths against the base URL,
//! attaches JSON headers and normalizes every outcome into `ApiResult`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// Per-call options. Headers here are merged over the JSON defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<R>> {
        self.request(Method::Get, path, None, &RequestOptions::default()).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<Option<R>> {
        let body = encode_body(body)?;
        self.request(Method::Post, path, Some(body), &RequestOptions::default()).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<Option<R>> {
        let body = encode_body(body)?;
        self.request(Method::Put, path, Some(body), &RequestOptions::default()).await
    }

    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<Option<R>> {
        let body = encode_body(body)?;
        self.request(Method::Patch, path, Some(body), &RequestOptions::default()).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<R>> {
        self.request(Method::Delete, path, None, &RequestOptions::default()).await
    }

    /// GET for collection endpoints: an empty success reads as an empty list.
    pub async fn get_list<R: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<R>> {
        Ok(self.get::<Vec<R>>(path).await?.unwrap_or_default())
    }

    /// Issue one request. `Ok(None)` means 204 or a JSON `null` body.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> ApiResult<Option<R>> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            headers: merge_headers(&options.headers),
            body,
        };
        log::debug!("[API] {} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("[API] {} {} transport error: {}", method.as_str(), path, e);
            e
        })?;
        decode_response(response).map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method.as_str(), path, e);
            e
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::new(format!("Failed to encode request body: {}", e)))
}

/// JSON content type first, then caller headers in order. A caller header
/// with the same name (case-insensitive) replaces the earlier value in place.
fn merge_headers(extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
    for (name, value) in extra {
        match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(slot) => slot.1 = value.clone(),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<Option<R>> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    if response.status == 204 {
        return Ok(None);
    }
    serde_json::from_str::<Option<R>>(&response.body)
        .map_err(|e| ApiError::new(format!("Invalid JSON response: {}", e)))
}
