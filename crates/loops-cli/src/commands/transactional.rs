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

use super::{print_json, properties_map};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use loops_client::{ListTransactionalOptions, LoopsClient, RequestContext, TransactionalEmail};
use tracing::info;

#[derive(Args, Debug)]
pub struct TransactionalCommand {
  #[command(subcommand)]
  command: TransactionalSubcommands,
}

#[derive(Subcommand, Debug)]
enum TransactionalSubcommands {
  /// Send a transactional email
  Send {
    /// ID of the published transactional email
    transactional_id: String,

    /// Recipient address
    email: String,

    /// Create a contact for the recipient if none exists
    #[arg(long)]
    add_to_audience: bool,

    /// Data variable as key=value; repeatable
    #[arg(short = 'd', long = "data")]
    data_variables: Vec<String>,
  },

  /// List published transactional emails
  List {
    /// Results per page (10-50)
    #[arg(long)]
    per_page: Option<u32>,

    /// Cursor from a previous page
    #[arg(long)]
    cursor: Option<String>,

    /// Follow nextCursor until every page is fetched
    #[arg(long)]
    all: bool,
  },
}

pub async fn execute(cmd: TransactionalCommand, client: &LoopsClient, ctx: &RequestContext) -> Result<()> {
  let transactional = client.transactional();
  match cmd.command {
    TransactionalSubcommands::Send { transactional_id, email, add_to_audience, data_variables } => {
      let data_variables = properties_map(&data_variables)?;
      let message = TransactionalEmail {
        add_to_audience: add_to_audience.then_some(true),
        data_variables: (!data_variables.is_empty()).then_some(data_variables),
        ..TransactionalEmail::new(transactional_id, email)
      };
      transactional.send(ctx, &message).await.context("Failed to send transactional email")?;
      info!("Sent transactional email {} to {}", message.transactional_id, message.email);
      Ok(())
    }
    TransactionalSubcommands::List { per_page, cursor, all } => {
      let mut options = ListTransactionalOptions { per_page, cursor };
      if !all {
        return print_json(&transactional.list(ctx, &options).await?);
      }

      let mut templates = Vec::new();
      loop {
        let page = transactional.list(ctx, &options).await?;
        templates.extend(page.data);
        match advance_cursor(page.pagination.next_cursor, options.cursor.as_deref()) {
          Some(next) => options.cursor = Some(next),
          None => break,
        }
      }
      print_json(&templates)
    }
  }
}

/// Cursor for the next page; `None` on the last page or when the server
/// repeats the cursor it was just given
fn advance_cursor(next: Option<String>, current: Option<&str>) -> Option<String> {
  next.filter(|c| !c.is_empty() && Some(c.as_str()) != current)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_advance_cursor() {
    assert_eq!(advance_cursor(Some("b".to_string()), Some("a")), Some("b".to_string()));
    assert_eq!(advance_cursor(Some("b".to_string()), None), Some("b".to_string()));
    assert_eq!(advance_cursor(None, Some("a")), None);
    assert_eq!(advance_cursor(Some(String::new()), None), None);
  }

  #[test]
  fn test_repeated_cursor_ends_paging() {
    assert_eq!(advance_cursor(Some("a".to_string()), Some("a")), None);
  }
}
