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

//! Transactional email endpoints

use crate::client::LoopsClient;
use crate::context::RequestContext;
use loops_core::{Error, Result};
use loops_models::{MessageResponse, TransactionalEmail, TransactionalEmailList};
use std::ops::RangeInclusive;
use tracing::instrument;

/// Allowed values for [`ListTransactionalOptions::per_page`]
pub const PER_PAGE_RANGE: RangeInclusive<u32> = 10..=50;

/// Paging for [`TransactionalEndpoints::list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionalOptions {
  /// Results per page, 10 to 50; the server defaults to 20
  pub per_page: Option<u32>,

  /// `nextCursor` from the previous page
  pub cursor: Option<String>,
}

impl ListTransactionalOptions {
  fn to_query(&self) -> Result<Vec<(&'static str, String)>> {
    let mut query = Vec::with_capacity(2);
    if let Some(per_page) = self.per_page {
      if !PER_PAGE_RANGE.contains(&per_page) {
        return Err(Error::Validation(format!(
          "perPage must be between {} and {} (inclusive), got {}",
          PER_PAGE_RANGE.start(),
          PER_PAGE_RANGE.end(),
          per_page
        )));
      }
      query.push(("perPage", per_page.to_string()));
    }
    if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
      query.push(("cursor", cursor.to_string()));
    }
    Ok(query)
  }
}

/// Transactional email endpoints
pub struct TransactionalEndpoints {
  client: LoopsClient,
}

impl TransactionalEndpoints {
  pub(crate) fn new(client: LoopsClient) -> Self {
    Self { client }
  }

  /// Send a transactional email
  #[instrument(skip_all, fields(transactional_id = %email.transactional_id))]
  pub async fn send(&self, ctx: &RequestContext, email: &TransactionalEmail) -> Result<()> {
    let _: MessageResponse = self.client.post(ctx, "/transactional", email).await?;
    Ok(())
  }

  /// One page of published transactional emails
  ///
  /// # Errors
  ///
  /// [`Error::Validation`] if `per_page` is outside [`PER_PAGE_RANGE`]; no
  /// request is sent in that case.
  #[instrument(skip(self, ctx))]
  pub async fn list(&self, ctx: &RequestContext, options: &ListTransactionalOptions) -> Result<TransactionalEmailList> {
    let query = options.to_query()?;
    self.client.get(ctx, "/transactional", &query).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_per_page_bounds() {
    for per_page in [5, 9, 51, 60] {
      let options = ListTransactionalOptions { per_page: Some(per_page), cursor: None };
      assert!(options.to_query().unwrap_err().is_validation());
    }
    for per_page in [10, 20, 50] {
      let options = ListTransactionalOptions { per_page: Some(per_page), cursor: None };
      assert_eq!(options.to_query().unwrap(), vec![("perPage", per_page.to_string())]);
    }
  }

  #[test]
  fn test_defaults_send_no_query() {
    assert!(ListTransactionalOptions::default().to_query().unwrap().is_empty());

    let options = ListTransactionalOptions { per_page: None, cursor: Some(String::new()) };
    assert!(options.to_query().unwrap().is_empty());
  }

  #[test]
  fn test_cursor() {
    let options = ListTransactionalOptions { per_page: Some(20), cursor: Some("abc".to_string()) };
    assert_eq!(
      options.to_query().unwrap(),
      vec![("perPage", "20".to_string()), ("cursor", "abc".to_string())]
    );
  }
}
