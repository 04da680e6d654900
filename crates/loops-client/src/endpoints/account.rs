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

use crate::client::LoopsClient;
use crate::context::RequestContext;
use loops_core::Result;
use loops_models::ApiKeyInfo;
use tracing::instrument;

/// API key and account endpoints
pub struct AccountEndpoints {
  client: LoopsClient,
}

impl AccountEndpoints {
  pub(crate) fn new(client: LoopsClient) -> Self {
    Self { client }
  }

  /// Check that the configured API key is valid
  ///
  /// An invalid key surfaces as [`loops_core::Error::Api`] with the server's
  /// message (e.g. "Invalid API key").
  #[instrument(skip_all)]
  pub async fn test_api_key(&self, ctx: &RequestContext) -> Result<ApiKeyInfo> {
    self.client.get(ctx, "/api-key", &[]).await
  }

  /// IP addresses Loops sends email from
  #[instrument(skip_all)]
  pub async fn dedicated_sending_ips(&self, ctx: &RequestContext) -> Result<Vec<String>> {
    self.client.get(ctx, "/dedicated-sending-ips", &[]).await
  }
}
