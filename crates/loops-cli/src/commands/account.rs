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

use super::print_json;
use anyhow::Result;
use clap::Subcommand;
use loops_client::{LoopsClient, RequestContext};

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
  /// List mailing lists
  Lists,

  /// List dedicated sending IP addresses
  SendingIps,

  /// Check that the API key is valid
  TestKey,
}

pub async fn execute(cmd: AccountCommands, client: &LoopsClient, ctx: &RequestContext) -> Result<()> {
  match cmd {
    AccountCommands::Lists => print_json(&client.mailing_lists().list(ctx).await?),
    AccountCommands::SendingIps => print_json(&client.account().dedicated_sending_ips(ctx).await?),
    AccountCommands::TestKey => {
      let info = client.account().test_api_key(ctx).await?;
      println!("API key is valid for team {}", info.team_name);
      Ok(())
    }
  }
}
