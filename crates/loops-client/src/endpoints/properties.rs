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
use loops_models::{ContactProperty, ContactPropertyCreate, PropertyFilter, SuccessResponse};
use tracing::instrument;

/// Contact property endpoints
pub struct PropertyEndpoints {
  client: LoopsClient,
}

impl PropertyEndpoints {
  pub(crate) fn new(client: LoopsClient) -> Self {
    Self { client }
  }

  /// List contact properties, optionally only the team's custom ones
  #[instrument(skip(self, ctx))]
  pub async fn list(&self, ctx: &RequestContext, filter: PropertyFilter) -> Result<Vec<ContactProperty>> {
    let query: Vec<(&str, String)> = filter.as_query().map(|list| ("list", list.to_string())).into_iter().collect();
    self.client.get(ctx, "/contacts/properties", &query).await
  }

  /// Create a custom contact property
  #[instrument(skip_all, fields(name = %property.name, property_type = %property.property_type))]
  pub async fn create(&self, ctx: &RequestContext, property: &ContactPropertyCreate) -> Result<()> {
    let _: SuccessResponse = self.client.post(ctx, "/contacts/properties", property).await?;
    Ok(())
  }

  /// Custom fields from the legacy endpoint
  #[deprecated(note = "use `list(ctx, PropertyFilter::Custom)` instead")]
  #[instrument(skip_all)]
  pub async fn custom_fields(&self, ctx: &RequestContext) -> Result<Vec<ContactProperty>> {
    self.client.get(ctx, "/contacts/customFields", &[]).await
  }
}
