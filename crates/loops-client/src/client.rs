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

use crate::context::RequestContext;
use crate::endpoints::{
  account::AccountEndpoints, contacts::ContactEndpoints, events::EventEndpoints,
  mailing_lists::MailingListEndpoints, properties::PropertyEndpoints,
  transactional::TransactionalEndpoints,
};
use crate::interceptor::{BearerAuth, JsonContentType, RequestInterceptor};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
use loops_core::{Config, Error, Result};
use loops_models::{ErrorResponse, MessageResponse};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Construction-time settings for [`LoopsClient`]
///
/// Applied once by [`LoopsClient::with_options`]; the resulting client never
/// changes them.
#[derive(Clone)]
pub struct ClientOptions {
  /// API root that request paths are resolved against
  pub base_url: String,

  /// Sent as a bearer token when set
  pub api_key: Option<String>,

  /// Request timeout for the default transport; ignored when `transport` is set
  pub timeout: Duration,

  /// Replaces the default `reqwest` transport
  pub transport: Option<Arc<dyn HttpTransport>>,

  /// Extra interceptors, run after auth and before the content-type header
  pub interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl Default for ClientOptions {
  fn default() -> Self {
    Self {
      base_url: loops_core::LOOPS_BASE_URL.to_string(),
      api_key: None,
      timeout: Duration::from_secs(loops_core::DEFAULT_TIMEOUT_SECS),
      transport: None,
      interceptors: Vec::new(),
    }
  }
}

impl From<Config> for ClientOptions {
  fn from(config: Config) -> Self {
    Self {
      base_url: config.base_url,
      api_key: config.api_key,
      timeout: Duration::from_secs(config.timeout_secs),
      ..Self::default()
    }
  }
}

impl ClientOptions {
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
    self.api_key = Some(api_key.into());
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
    self.transport = Some(Arc::new(transport));
    self
  }

  pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
    self.interceptors.push(Arc::new(interceptor));
    self
  }
}

impl std::fmt::Debug for ClientOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClientOptions")
      .field("base_url", &self.base_url)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("timeout", &self.timeout)
      .field("transport", &self.transport.as_ref().map(|_| "custom"))
      .field("interceptors", &self.interceptors.len())
      .finish()
  }
}

/// Main Loops API client
///
/// Cheap to clone; clones share the same frozen configuration and can be used
/// from many tasks at once. Endpoints are grouped by resource.
///
/// # Examples
///
/// ```rust,no_run
/// use loops_client::{Contact, LoopsClient, RequestContext};
/// use loops_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let client = LoopsClient::new(Config::from_env()?)?;
///   let ctx = RequestContext::new();
///
///   let contact = Contact::new("neil.armstrong@moon.space").with_custom_property("mission", "Apollo 11");
///   let id = client.contacts().create(&ctx, &contact).await?;
///   println!("created contact {}", id);
///   Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LoopsClient {
  inner: Arc<ClientInner>,
}

struct ClientInner {
  base_url: Url,
  transport: Arc<dyn HttpTransport>,
  interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl LoopsClient {
  /// Create a client from a [`Config`] using the default transport
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] if the base URL or API key is unusable or the
  /// HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Self::with_options(config.into())
  }

  /// Create a client from environment variables (see [`Config::from_env`])
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Create a client from explicit options
  pub fn with_options(options: ClientOptions) -> Result<Self> {
    let base_url = parse_base_url(&options.base_url)?;

    let transport: Arc<dyn HttpTransport> = match options.transport {
      Some(transport) => transport,
      None => Arc::new(ReqwestTransport::new(options.timeout)?),
    };

    let mut interceptors: Vec<Arc<dyn RequestInterceptor>> = Vec::with_capacity(options.interceptors.len() + 2);
    if let Some(api_key) = options.api_key.as_deref().filter(|k| !k.is_empty()) {
      interceptors.push(Arc::new(BearerAuth::new(api_key)?));
    }
    interceptors.extend(options.interceptors);
    interceptors.push(Arc::new(JsonContentType));

    Ok(Self { inner: Arc::new(ClientInner { base_url, transport, interceptors }) })
  }

  /// The API root all paths are resolved against
  pub fn base_url(&self) -> &Url {
    &self.inner.base_url
  }

  /// Contact create, update, find and delete
  pub fn contacts(&self) -> ContactEndpoints {
    ContactEndpoints::new(self.clone())
  }

  /// Mailing lists
  pub fn mailing_lists(&self) -> MailingListEndpoints {
    MailingListEndpoints::new(self.clone())
  }

  /// Events that trigger loops
  pub fn events(&self) -> EventEndpoints {
    EventEndpoints::new(self.clone())
  }

  /// Transactional email sends and templates
  pub fn transactional(&self) -> TransactionalEndpoints {
    TransactionalEndpoints::new(self.clone())
  }

  /// Contact property definitions
  pub fn properties(&self) -> PropertyEndpoints {
    PropertyEndpoints::new(self.clone())
  }

  /// API key and account-level information
  pub fn account(&self) -> AccountEndpoints {
    AccountEndpoints::new(self.clone())
  }

  /// Build a request for `path` relative to the base URL
  ///
  /// A leading `/` in `path` is still relative to the base URL. `query` pairs
  /// are percent-encoded in the order given; `body` is serialized to JSON
  /// immediately. All interceptors are applied before returning.
  pub fn build_request<B>(
    &self,
    ctx: &RequestContext,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
  ) -> Result<ApiRequest>
  where
    B: Serialize + ?Sized,
  {
    let url = self.resolve(path, query)?;

    let mut request = ApiRequest::new(method, url);
    if let Some(body) = body {
      let bytes = serde_json::to_vec(body)
        .map_err(|e| Error::Encode(format!("failed to marshal request body: {}", e)))?;
      request.body = Some(bytes);
    }

    for interceptor in &self.inner.interceptors {
      interceptor.intercept(ctx, &mut request)?;
    }

    Ok(request)
  }

  /// Dispatch a built request and decode the response as `T`
  ///
  /// Statuses below 300 are decoded as `T`. Anything else becomes
  /// [`Error::Api`] carrying the server's message.
  #[instrument(skip_all, fields(method = %request.method, path = %request.url.path()))]
  pub async fn send<T>(&self, ctx: &RequestContext, request: ApiRequest) -> Result<T>
  where
    T: DeserializeOwned,
  {
    ctx.check()?;

    debug!("Making request");
    let response = ctx.run(self.inner.transport.execute(request)).await?;
    debug!(status = response.status, "Request completed");

    if response.is_success() {
      return serde_json::from_slice(&response.body)
        .map_err(|e| Error::Decode(format!("failed to unmarshal response body: {}", e)));
    }

    Err(normalize_error(&response))
  }

  pub(crate) async fn get<T>(&self, ctx: &RequestContext, path: &str, query: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let request = self.build_request::<()>(ctx, Method::GET, path, query, None)?;
    self.send(ctx, request).await
  }

  pub(crate) async fn post<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let request = self.build_request(ctx, Method::POST, path, &[], Some(body))?;
    self.send(ctx, request).await
  }

  pub(crate) async fn put<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let request = self.build_request(ctx, Method::PUT, path, &[], Some(body))?;
    self.send(ctx, request).await
  }

  fn resolve(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let relative = path.trim_start_matches('/');
    let mut url = self
      .inner
      .base_url
      .join(relative)
      .map_err(|e| Error::Config(format!("invalid path {}: {}", path, e)))?;

    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
  }
}

impl std::fmt::Debug for LoopsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoopsClient")
      .field("base_url", &self.inner.base_url.as_str())
      .field("interceptors", &self.inner.interceptors.len())
      .finish()
  }
}

/// Parse the API root, making sure relative paths resolve beneath it
fn parse_base_url(raw: &str) -> Result<Url> {
  let mut url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid api url {}: {}", raw, e)))?;
  if url.cannot_be_a_base() {
    return Err(Error::Config(format!("api url {} cannot be used as a base", raw)));
  }
  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }
  Ok(url)
}

/// Turn a non-success response into [`Error::Api`]
///
/// Tries `{"error": "..."}`, then `{"success": false, "message": "..."}`, then
/// falls back to the raw body. Empty strings do not count as a match.
pub(crate) fn normalize_error(response: &ApiResponse) -> Error {
  let status = response.status;

  if let Ok(ErrorResponse { error: Some(message) }) = serde_json::from_slice::<ErrorResponse>(&response.body) {
    if !message.is_empty() {
      return Error::Api { status, message };
    }
  }

  if let Ok(MessageResponse { message, .. }) = serde_json::from_slice::<MessageResponse>(&response.body) {
    if !message.is_empty() {
      return Error::Api { status, message };
    }
  }

  Error::Api { status, message: response.text() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use serde_json::json;

  struct NoNetwork;

  #[async_trait]
  impl HttpTransport for NoNetwork {
    async fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
      Err(Error::transport("network disabled in tests"))
    }
  }

  fn client(base_url: &str) -> LoopsClient {
    LoopsClient::with_options(
      ClientOptions::default().with_base_url(base_url).with_api_key("test_key").with_transport(NoNetwork),
    )
    .expect("Failed to create client")
  }

  #[test]
  fn test_client_creation_from_config() {
    let client = LoopsClient::new(Config::with_api_key("test_key")).expect("Failed to create client");
    assert_eq!(client.base_url().as_str(), "https://app.loops.so/api/v1/");
  }

  #[test]
  fn test_invalid_base_url_is_config_error() {
    let err = LoopsClient::with_options(ClientOptions::default().with_base_url("::nope::")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test]
  fn test_base_url_gets_trailing_slash() {
    let client = client("https://example.com/api/v1");
    assert_eq!(client.base_url().as_str(), "https://example.com/api/v1/");
  }

  #[test]
  fn test_leading_slash_is_relative_to_base() {
    let client = client("https://app.loops.so/api/v1/");
    let ctx = RequestContext::new();
    let with_slash = client.build_request::<()>(&ctx, Method::GET, "/contacts/find", &[], None).unwrap();
    let without = client.build_request::<()>(&ctx, Method::GET, "contacts/find", &[], None).unwrap();
    assert_eq!(with_slash.url.as_str(), "https://app.loops.so/api/v1/contacts/find");
    assert_eq!(with_slash.url, without.url);
  }

  #[test]
  fn test_query_encoding_is_deterministic() {
    let client = client("https://app.loops.so/api/v1/");
    let ctx = RequestContext::new();
    let query = [("email", "a+b@example.com".to_string()), ("cursor", "x y".to_string())];
    let first = client.build_request::<()>(&ctx, Method::GET, "/contacts/find", &query, None).unwrap();
    let second = client.build_request::<()>(&ctx, Method::GET, "/contacts/find", &query, None).unwrap();
    assert_eq!(first.url.query(), Some("email=a%2Bb%40example.com&cursor=x+y"));
    assert_eq!(first.url, second.url);
  }

  #[test]
  fn test_body_is_serialized_and_headers_applied() {
    let client = client("https://app.loops.so/api/v1/");
    let body = json!({"eventName": "signup", "email": "a@b.c"});
    let request =
      client.build_request(&RequestContext::new(), Method::POST, "/events/send", &[], Some(&body)).unwrap();

    let sent: serde_json::Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, body);
    assert_eq!(request.header("authorization"), Some("Bearer test_key"));
    assert_eq!(request.header("content-type"), Some("application/json"));
  }

  #[test]
  fn test_no_auth_header_without_api_key() {
    let client = LoopsClient::with_options(ClientOptions::default().with_transport(NoNetwork)).unwrap();
    let request = client.build_request::<()>(&RequestContext::new(), Method::GET, "/lists", &[], None).unwrap();
    assert!(request.header("authorization").is_none());
    assert_eq!(request.header("content-type"), Some("application/json"));
  }

  #[test]
  fn test_normalize_error_prefers_error_field() {
    let err = normalize_error(&ApiResponse::new(400, r#"{"error":"bad request"}"#));
    assert!(matches!(err, Error::Api { status: 400, ref message } if message == "bad request"));
  }

  #[test]
  fn test_normalize_error_uses_message() {
    let err = normalize_error(&ApiResponse::new(400, r#"{"success":false,"message":"oops"}"#));
    assert_eq!(err.to_string(), "oops");
  }

  #[test]
  fn test_normalize_error_empty_error_falls_through() {
    let err = normalize_error(&ApiResponse::new(409, r#"{"error":"","message":"Email already on list."}"#));
    assert_eq!(err.to_string(), "Email already on list.");
  }

  #[test]
  fn test_normalize_error_raw_body_fallback() {
    let err = normalize_error(&ApiResponse::new(500, "internal error"));
    assert!(matches!(err, Error::Api { status: 500, ref message } if message == "internal error"));

    let err = normalize_error(&ApiResponse::new(502, r#"{"success":false}"#));
    assert_eq!(err.to_string(), r#"{"success":false}"#);
  }

  #[tokio::test]
  async fn test_transport_failure_surfaces() {
    let client = client("https://app.loops.so/api/v1/");
    let err = client.account().test_api_key(&RequestContext::new()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
  }
}
