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

//! Request interceptors
//!
//! Interceptors mutate an outgoing [`ApiRequest`] after it has been built and
//! before it is dispatched. The client runs them in a fixed order: bearer auth
//! (when an API key is configured), then caller-supplied interceptors in
//! registration order, then [`JsonContentType`]. The first failure aborts the
//! call.

use crate::context::RequestContext;
use crate::transport::ApiRequest;
use loops_core::{Error, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Mutates outgoing requests
pub trait RequestInterceptor: Send + Sync {
  fn intercept(&self, ctx: &RequestContext, request: &mut ApiRequest) -> Result<()>;
}

impl<F> RequestInterceptor for F
where
  F: Fn(&RequestContext, &mut ApiRequest) -> Result<()> + Send + Sync,
{
  fn intercept(&self, ctx: &RequestContext, request: &mut ApiRequest) -> Result<()> {
    self(ctx, request)
  }
}

/// Sets `Authorization: Bearer <api key>`
#[derive(Clone)]
pub struct BearerAuth {
  value: HeaderValue,
}

impl BearerAuth {
  pub fn new(api_key: &str) -> Result<Self> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key))
      .map_err(|_| Error::Config("API key contains characters not allowed in a header".to_string()))?;
    value.set_sensitive(true);
    Ok(Self { value })
  }
}

impl std::fmt::Debug for BearerAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BearerAuth").field("value", &"<redacted>").finish()
  }
}

impl RequestInterceptor for BearerAuth {
  fn intercept(&self, _ctx: &RequestContext, request: &mut ApiRequest) -> Result<()> {
    request.headers.insert(AUTHORIZATION, self.value.clone());
    Ok(())
  }
}

/// Sets `Content-Type: application/json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentType;

impl RequestInterceptor for JsonContentType {
  fn intercept(&self, _ctx: &RequestContext, request: &mut ApiRequest) -> Result<()> {
    request.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(())
  }
}
