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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use loops_client::{LoopsClient, RequestContext};
use loops_core::Config;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{
  account::AccountCommands, contact::ContactCommand, event::EventCommand, property::PropertyCommand,
  transactional::TransactionalCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "loops")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// API root, overriding LOOPS_BASE_URL
  #[arg(long, global = true)]
  base_url: Option<String>,

  /// Give up on the call after this many seconds
  #[arg(long, global = true)]
  deadline: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Create, update, find and delete contacts
  Contact(ContactCommand),
  /// Send events
  Event(EventCommand),
  /// Send and list transactional emails
  Transactional(TransactionalCommand),
  /// List and create contact properties
  Property(PropertyCommand),
  #[command(flatten)]
  Account(AccountCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // Logs on stderr, JSON results on stdout
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = Config::from_env_with_base_url(cli.base_url).context("Failed to load configuration")?;
  if config.api_key.is_none() {
    tracing::warn!("LOOPS_API_KEY is not set; requests will be sent without authorization");
  }

  let client = LoopsClient::new(config).context("Failed to create Loops client")?;

  let mut ctx = RequestContext::new();
  if let Some(secs) = cli.deadline {
    ctx = ctx.with_timeout(Duration::from_secs(secs));
  }

  match cli.command {
    Commands::Contact(cmd) => commands::contact::execute(cmd, &client, &ctx).await?,
    Commands::Event(cmd) => commands::event::execute(cmd, &client, &ctx).await?,
    Commands::Transactional(cmd) => commands::transactional::execute(cmd, &client, &ctx).await?,
    Commands::Property(cmd) => commands::property::execute(cmd, &client, &ctx).await?,
    Commands::Account(cmd) => commands::account::execute(cmd, &client, &ctx).await?,
  }

  Ok(())
}
