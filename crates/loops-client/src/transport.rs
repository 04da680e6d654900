/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for Loops API requests
//!
//! Requests and responses cross the transport boundary as plain data
//! ([`ApiRequest`] / [`ApiResponse`]), so the network side can be swapped for
//! recorded fixtures in tests without touching the request pipeline.

use async_trait::async_trait;
use loops_core::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// An outgoing request, fully built and ready to dispatch
#[derive(Debug, Clone)]
pub struct ApiRequest {
  pub method: Method,
  pub url: Url,
  pub headers: HeaderMap,
  /// Serialized JSON payload
  pub body: Option<Vec<u8>>,
}

impl ApiRequest {
  pub fn new(method: Method, url: Url) -> Self {
    Self { method, url, headers: HeaderMap::new(), body: None }
  }

  /// Set a header, replacing any existing value
  pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
      .map_err(|e| Error::Config(format!("invalid header name {}: {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
      .map_err(|e| Error::Config(format!("invalid value for header {}: {}", name, e)))?;
    self.headers.insert(header_name, header_value);
    Ok(())
  }

  /// Header value as text, if present and valid UTF-8
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|v| v.to_str().ok())
  }
}

/// A response with its body fully read
#[derive(Debug, Clone)]
pub struct ApiResponse {
  pub status: u16,
  pub headers: HeaderMap,
  pub body: Vec<u8>,
}

impl ApiResponse {
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self { status, headers: HeaderMap::new(), body: body.into() }
  }

  /// Anything below 300 counts as success
  pub fn is_success(&self) -> bool {
    self.status < 300
  }

  /// Body as text, with invalid UTF-8 replaced
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.body).into_owned()
  }
}

/// Executes requests against the network (or a stand-in for it)
///
/// Implementations must read the complete response body before returning and
/// report connection-level failures as [`Error::Transport`]. Non-success HTTP
/// statuses are not errors at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
  async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client: Client,
}

impl ReqwestTransport {
  /// Create a transport with the given per-request timeout
  pub fn new(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("loops-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client })
  }

  /// Wrap an already configured `reqwest` client
  pub fn from_client(client: Client) -> Self {
    Self { client }
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
    let mut builder = self.client.request(request.method, request.url).headers(request.headers);
    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response = builder.send().await.map_err(Error::transport)?;
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::transport)?.to_vec();

    debug!("Response body length: {} bytes", body.len());

    Ok(ApiResponse { status, headers, body })
  }
}
