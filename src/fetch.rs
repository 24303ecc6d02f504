//! Browser Transport
//!
//! `Transport` over the browser's fetch API.

use async_trait::async_trait;
use gloo_net::http::Request;
use bookable_client::{ApiError, ApiResult, HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::new(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = if status == 204 {
            String::new()
        } else {
            response
                .text()
                .await
                .map_err(|e| ApiError::new(format!("Failed to read response: {}", e)))?
        };
        Ok(HttpResponse::new(status, body))
    }
}
