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
use clap::{Args, Subcommand};
use loops_client::{ContactPropertyCreate, LoopsClient, PropertyFilter, PropertyType, RequestContext};
use tracing::info;

#[derive(Args, Debug)]
pub struct PropertyCommand {
  #[command(subcommand)]
  command: PropertySubcommands,
}

#[derive(Subcommand, Debug)]
enum PropertySubcommands {
  /// List contact properties
  List {
    /// Only team-defined properties
    #[arg(long)]
    custom: bool,
  },

  /// Create a custom contact property
  Create {
    /// Property name in camelCase
    name: String,

    /// string, number, boolean or date
    #[arg(long = "type", default_value = "string")]
    property_type: PropertyType,
  },
}

pub async fn execute(cmd: PropertyCommand, client: &LoopsClient, ctx: &RequestContext) -> Result<()> {
  match cmd.command {
    PropertySubcommands::List { custom } => {
      let filter = if custom { PropertyFilter::Custom } else { PropertyFilter::All };
      print_json(&client.properties().list(ctx, filter).await?)
    }
    PropertySubcommands::Create { name, property_type } => {
      let property = ContactPropertyCreate { name, property_type };
      client.properties().create(ctx, &property).await?;
      info!("Created property {} ({})", property.name, property.property_type);
      Ok(())
    }
  }
}
