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

use super::{lists_map, print_json, properties_map};
use anyhow::Result;
use clap::{Args, Subcommand};
use loops_client::{Contact, ContactIdentifier, LoopsClient, RequestContext};
use serde_json::json;
use tracing::info;

#[derive(Args, Debug)]
pub struct ContactCommand {
  #[command(subcommand)]
  command: ContactSubcommands,
}

/// Fields shared by create and update
#[derive(Args, Debug)]
struct ContactFields {
  /// Email address
  email: String,

  #[arg(long)]
  first_name: Option<String>,

  #[arg(long)]
  last_name: Option<String>,

  /// External user ID
  #[arg(long)]
  user_id: Option<String>,

  #[arg(long)]
  user_group: Option<String>,

  #[arg(long)]
  source: Option<String>,

  /// Mark the contact as unsubscribed
  #[arg(long)]
  unsubscribed: bool,

  /// Custom property as key=value; repeatable
  #[arg(short, long = "property")]
  properties: Vec<String>,

  /// Mailing list as listId or listId=false; repeatable
  #[arg(short, long = "list")]
  lists: Vec<String>,
}

impl ContactFields {
  fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      first_name: self.first_name,
      last_name: self.last_name,
      user_id: self.user_id,
      user_group: self.user_group,
      source: self.source,
      subscribed: !self.unsubscribed,
      mailing_lists: lists_map(&self.lists)?,
      custom_properties: properties_map(&self.properties)?,
      ..Contact::new(self.email)
    })
  }
}

/// Exactly one of --email or --user-id
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Identity {
  #[arg(long)]
  email: Option<String>,

  #[arg(long)]
  user_id: Option<String>,
}

impl From<Identity> for ContactIdentifier {
  fn from(identity: Identity) -> Self {
    ContactIdentifier { email: identity.email, user_id: identity.user_id }
  }
}

#[derive(Subcommand, Debug)]
enum ContactSubcommands {
  /// Create a contact
  Create(ContactFields),

  /// Update a contact, creating it if it does not exist
  Update(ContactFields),

  /// Find a contact by email or user ID
  Find(Identity),

  /// Delete a contact by email or user ID
  Delete(Identity),
}

pub async fn execute(cmd: ContactCommand, client: &LoopsClient, ctx: &RequestContext) -> Result<()> {
  let contacts = client.contacts();
  match cmd.command {
    ContactSubcommands::Create(fields) => {
      let id = contacts.create(ctx, &fields.into_contact()?).await?;
      info!("Created contact {}", id);
      print_json(&json!({ "id": id }))
    }
    ContactSubcommands::Update(fields) => {
      let id = contacts.update(ctx, &fields.into_contact()?).await?;
      print_json(&json!({ "id": id }))
    }
    ContactSubcommands::Find(identity) => {
      let contact = contacts.find(ctx, &identity.into()).await?;
      print_json(&contact)
    }
    ContactSubcommands::Delete(identity) => {
      contacts.delete(ctx, &identity.into()).await?;
      info!("Contact deleted");
      Ok(())
    }
  }
}
