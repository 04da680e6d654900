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

use super::{lists_map, properties_map};
use anyhow::Result;
use clap::{Args, Subcommand};
use loops_client::{Event, LoopsClient, RequestContext};
use tracing::info;

#[derive(Args, Debug)]
pub struct EventCommand {
  #[command(subcommand)]
  command: EventSubcommands,
}

#[derive(Subcommand, Debug)]
enum EventSubcommands {
  /// Send an event for one contact
  Send {
    /// Name of the event
    event_name: String,

    #[arg(long, conflicts_with = "user_id", required_unless_present = "user_id")]
    email: Option<String>,

    #[arg(long)]
    user_id: Option<String>,

    /// Event property as key=value; repeatable
    #[arg(short = 'e', long = "event-property")]
    event_properties: Vec<String>,

    /// Contact property as key=value; repeatable
    #[arg(short = 'p', long = "contact-property")]
    contact_properties: Vec<String>,

    /// Mailing list as listId or listId=false; repeatable
    #[arg(short, long = "list")]
    lists: Vec<String>,
  },
}

pub async fn execute(cmd: EventCommand, client: &LoopsClient, ctx: &RequestContext) -> Result<()> {
  match cmd.command {
    EventSubcommands::Send { event_name, email, user_id, event_properties, contact_properties, lists } => {
      let event_properties = properties_map(&event_properties)?;
      let lists = lists_map(&lists)?;
      let event = Event {
        email,
        user_id,
        event_name,
        contact_properties: properties_map(&contact_properties)?,
        event_properties: (!event_properties.is_empty()).then_some(event_properties),
        mailing_lists: (!lists.is_empty()).then_some(lists),
      };
      client.events().send(ctx, &event).await?;
      info!("Sent event {}", event.event_name);
      Ok(())
    }
  }
}
