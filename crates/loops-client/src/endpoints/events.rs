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

use super::require_single_identity;
use crate::client::LoopsClient;
use crate::context::RequestContext;
use loops_core::Result;
use loops_models::{Event, MessageResponse};
use tracing::instrument;

/// Event endpoints
pub struct EventEndpoints {
  client: LoopsClient,
}

impl EventEndpoints {
  pub(crate) fn new(client: LoopsClient) -> Self {
    Self { client }
  }

  /// Send an event to trigger emails
  ///
  /// The event must name its contact by exactly one of email or user ID.
  #[instrument(skip_all, fields(event_name = %event.event_name))]
  pub async fn send(&self, ctx: &RequestContext, event: &Event) -> Result<()> {
    require_single_identity(event.email.as_deref(), event.user_id.as_deref(), "event")?;

    let _: MessageResponse = self.client.post(ctx, "/events/send", event).await?;
    Ok(())
  }
}
