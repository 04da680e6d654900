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

#![allow(dead_code)]

use loops_client::{ClientOptions, LoopsClient};
use std::sync::Once;
use wiremock::MockServer;

static TRACING: Once = Once::new();

pub const API_KEY: &str = "test_key";

/// Route library tracing to the test writer; RUST_LOG=debug to see it
pub fn init_tracing() {
  TRACING.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  });
}

/// Client pointed at the mock server's `/api/v1` root
pub fn client_for(server: &MockServer) -> LoopsClient {
  init_tracing();
  LoopsClient::with_options(
    ClientOptions::default().with_base_url(format!("{}/api/v1", server.uri())).with_api_key(API_KEY),
  )
  .expect("Failed to create client")
}

/// Client without an API key
pub fn anonymous_client_for(server: &MockServer) -> LoopsClient {
  init_tracing();
  LoopsClient::with_options(ClientOptions::default().with_base_url(format!("{}/api/v1/", server.uri())))
    .expect("Failed to create client")
}

pub async fn request_count(server: &MockServer) -> usize {
  server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}
