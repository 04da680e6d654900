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

//! Per-call cancellation and deadlines

use loops_core::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline scope for a single API call
///
/// Every endpoint method takes one. `RequestContext::default()` never cancels
/// and has no deadline, leaving only the transport's own timeout in effect.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
  cancellation: Option<CancellationToken>,
  deadline: Option<Instant>,
}

impl RequestContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Abort the call when `token` is cancelled
  pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
    self.cancellation = Some(token);
    self
  }

  /// Abort the call if it is still running after `timeout`
  pub fn with_timeout(self, timeout: Duration) -> Self {
    self.with_deadline(Instant::now() + timeout)
  }

  /// Abort the call at `deadline`; the earlier deadline wins if one is set
  pub fn with_deadline(mut self, deadline: Instant) -> Self {
    self.deadline = Some(match self.deadline {
      Some(existing) => existing.min(deadline),
      None => deadline,
    });
    self
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  pub fn cancellation_token(&self) -> Option<&CancellationToken> {
    self.cancellation.as_ref()
  }

  /// Fails if the context is already cancelled or past its deadline
  pub fn check(&self) -> Result<()> {
    if self.cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
      return Err(Error::transport("request cancelled"));
    }
    if self.deadline.is_some_and(|d| Instant::now() >= d) {
      return Err(Error::transport("deadline exceeded"));
    }
    Ok(())
  }

  /// Drive `fut` to completion unless the context is cancelled or expires first
  pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T>
  where
    F: Future<Output = Result<T>>,
  {
    let bounded = async {
      match self.deadline {
        Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
          Ok(result) => result,
          Err(_) => Err(Error::transport("deadline exceeded")),
        },
        None => fut.await,
      }
    };

    match &self.cancellation {
      Some(token) => {
        tokio::select! {
          biased;
          _ = token.cancelled() => Err(Error::transport("request cancelled")),
          result = bounded => result,
        }
      }
      None => bounded.await,
    }
  }
}
