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

//! Events that trigger loops

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An event sent for one contact, addressed by email or user ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  /// The contact's email address
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  /// The contact's user ID; must already be set on the contact in Loops
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,

  /// The name of the event
  pub event_name: String,

  /// Properties to update the contact with, including custom properties
  #[serde(default, skip_serializing_if = "Map::is_empty")]
  pub contact_properties: Map<String, Value>,

  /// Event properties, made available in emails triggered by the event
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub event_properties: Option<Map<String, Value>>,

  /// Mailing list IDs mapped to subscription status
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mailing_lists: Option<BTreeMap<String, bool>>,
}

impl Event {
  /// Event for the contact with the given email address
  pub fn for_email(event_name: impl Into<String>, email: impl Into<String>) -> Self {
    Event { event_name: event_name.into(), email: Some(email.into()), ..Event::default() }
  }

  /// Event for the contact with the given user ID
  pub fn for_user_id(event_name: impl Into<String>, user_id: impl Into<String>) -> Self {
    Event { event_name: event_name.into(), user_id: Some(user_id.into()), ..Event::default() }
  }

  /// Add an event property
  pub fn with_event_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.event_properties.get_or_insert_with(Map::new).insert(key.into(), value.into());
    self
  }
}
