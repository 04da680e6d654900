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

//! Contact endpoints
//!
//! Create, update, find and delete contacts in the team's audience. Custom
//! properties travel inlined in the contact JSON (see [`Contact`]).

use super::require_single_identity;
use crate::client::LoopsClient;
use crate::context::RequestContext;
use loops_core::{Error, Result};
use loops_models::{Contact, ContactIdentifier, IdResponse, MessageResponse};
use tracing::instrument;

/// Contact endpoints
pub struct ContactEndpoints {
  client: LoopsClient,
}

impl ContactEndpoints {
  pub(crate) fn new(client: LoopsClient) -> Self {
    Self { client }
  }

  /// Create a new contact
  ///
  /// Returns the ID Loops assigned to the contact.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use loops_client::{Contact, LoopsClient, RequestContext};
  /// # async fn run(client: LoopsClient) -> loops_client::Result<()> {
  /// let contact = Contact {
  ///   first_name: Some("Neil".to_string()),
  ///   ..Contact::new("neil.armstrong@moon.space")
  /// }
  /// .with_custom_property("companyRole", "Astronaut");
  ///
  /// let id = client.contacts().create(&RequestContext::new(), &contact).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn create(&self, ctx: &RequestContext, contact: &Contact) -> Result<String> {
    let response: IdResponse = self.client.post(ctx, "/contacts/create", contact).await?;
    Ok(response.id)
  }

  /// Update a contact, creating it if it does not exist
  #[instrument(skip_all)]
  pub async fn update(&self, ctx: &RequestContext, contact: &Contact) -> Result<String> {
    let response: IdResponse = self.client.put(ctx, "/contacts/update", contact).await?;
    Ok(response.id)
  }

  /// Find a contact by email or user ID
  ///
  /// # Errors
  ///
  /// [`Error::Validation`] unless exactly one of email / user ID is set, and
  /// [`Error::NotFound`] when no contact matches.
  #[instrument(skip_all)]
  pub async fn find(&self, ctx: &RequestContext, identifier: &ContactIdentifier) -> Result<Contact> {
    require_single_identity(identifier.email.as_deref(), identifier.user_id.as_deref(), "contact identifier")?;

    let mut query = Vec::with_capacity(1);
    if let Some(email) = &identifier.email {
      query.push(("email", email.clone()));
    }
    if let Some(user_id) = &identifier.user_id {
      query.push(("userId", user_id.clone()));
    }

    let contacts: Vec<Contact> = self.client.get(ctx, "/contacts/find", &query).await?;
    contacts.into_iter().next().ok_or_else(|| Error::NotFound("contact".to_string()))
  }

  /// Delete a contact by email or user ID
  #[instrument(skip_all)]
  pub async fn delete(&self, ctx: &RequestContext, identifier: &ContactIdentifier) -> Result<()> {
    require_single_identity(identifier.email.as_deref(), identifier.user_id.as_deref(), "contact identifier")?;

    let _: MessageResponse = self.client.post(ctx, "/contacts/delete", identifier).await?;
    Ok(())
  }
}
