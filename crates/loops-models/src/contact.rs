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

//! Contact records and contact identity descriptors
//!
//! A Loops contact is a fixed set of known attributes plus any number of
//! team-defined custom properties. On the wire both live side by side in one
//! flat JSON object, so [`Contact`] carries its own `Serialize` and
//! `Deserialize` implementations that split and merge the two key spaces.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Wire names of the known contact attributes.
///
/// Custom properties using one of these names are never written, and these
/// keys are never folded into [`Contact::custom_properties`] when decoding.
pub const RESERVED_CONTACT_KEYS: [&str; 10] = [
  "id",
  "email",
  "subscribed",
  "firstName",
  "lastName",
  "source",
  "userGroup",
  "userId",
  "optInStatus",
  "mailingLists",
];

/// Returns true if `key` names a known contact attribute
pub fn is_reserved_contact_key(key: &str) -> bool {
  RESERVED_CONTACT_KEYS.contains(&key)
}

/// A contact in a Loops audience
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
  /// The contact's ID, assigned by Loops
  pub id: String,

  /// The contact's email address
  pub email: String,

  /// The contact's first name
  pub first_name: Option<String>,

  /// The contact's last name
  pub last_name: Option<String>,

  /// The source the contact was created from
  pub source: Option<String>,

  /// Whether the contact receives campaign and loop emails
  pub subscribed: bool,

  /// User group used to segment contacts when sending emails
  pub user_group: Option<String>,

  /// A unique user ID from an external application
  pub user_id: Option<String>,

  /// Double opt-in status (`pending`, `accepted`, `rejected`)
  pub opt_in_status: Option<String>,

  /// Mailing list IDs mapped to subscription status
  pub mailing_lists: BTreeMap<String, bool>,

  /// Team-defined contact properties, inlined next to the known attributes
  pub custom_properties: Map<String, Value>,
}

impl Contact {
  /// Create a subscribed contact with just an email address
  pub fn new(email: impl Into<String>) -> Self {
    Contact { email: email.into(), subscribed: true, ..Contact::default() }
  }

  /// Set a custom property, replacing any previous value under `key`
  pub fn with_custom_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.custom_properties.insert(key.into(), value.into());
    self
  }

  /// Set a mailing list subscription
  pub fn with_mailing_list(mut self, list_id: impl Into<String>, subscribed: bool) -> Self {
    self.mailing_lists.insert(list_id.into(), subscribed);
    self
  }
}

impl Serialize for Contact {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(None)?;

    // always on the wire, even when empty/false
    map.serialize_entry("id", &self.id)?;
    map.serialize_entry("email", &self.email)?;
    map.serialize_entry("subscribed", &self.subscribed)?;

    let optional = [
      ("firstName", &self.first_name),
      ("lastName", &self.last_name),
      ("source", &self.source),
      ("userGroup", &self.user_group),
      ("userId", &self.user_id),
      ("optInStatus", &self.opt_in_status),
    ];
    for (key, value) in optional {
      if let Some(value) = value {
        map.serialize_entry(key, value)?;
      }
    }

    if !self.mailing_lists.is_empty() {
      map.serialize_entry("mailingLists", &self.mailing_lists)?;
    }

    for (key, value) in &self.custom_properties {
      if is_reserved_contact_key(key) {
        continue;
      }
      map.serialize_entry(key, value)?;
    }

    map.end()
  }
}

impl<'de> Deserialize<'de> for Contact {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let mut fields = Map::<String, Value>::deserialize(deserializer)?;

    let id = required_string::<D::Error>(&mut fields, "id")?;
    let email = required_string::<D::Error>(&mut fields, "email")?;
    let subscribed = match fields.remove("subscribed") {
      Some(Value::Bool(b)) => b,
      Some(other) => return Err(wrong_type("subscribed", "a boolean", &other)),
      None => return Err(de::Error::missing_field("subscribed")),
    };

    let first_name = optional_string(&mut fields, "firstName");
    let last_name = optional_string(&mut fields, "lastName");
    let source = optional_string(&mut fields, "source");
    let user_group = optional_string(&mut fields, "userGroup");
    let user_id = optional_string(&mut fields, "userId");
    let opt_in_status = optional_string(&mut fields, "optInStatus");
    let mailing_lists = mailing_lists::<D::Error>(&mut fields)?;

    // everything the known attributes did not claim
    Ok(Contact {
      id,
      email,
      first_name,
      last_name,
      source,
      subscribed,
      user_group,
      user_id,
      opt_in_status,
      mailing_lists,
      custom_properties: fields,
    })
  }
}

fn required_string<E: de::Error>(fields: &mut Map<String, Value>, key: &'static str) -> Result<String, E> {
  match fields.remove(key) {
    Some(Value::String(s)) => Ok(s),
    Some(other) => Err(wrong_type(key, "a string", &other)),
    None => Err(E::missing_field(key)),
  }
}

/// Absent, null and mistyped values all read as `None`
fn optional_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
  match fields.remove(key) {
    Some(Value::String(s)) => Some(s),
    _ => None,
  }
}

fn mailing_lists<E: de::Error>(fields: &mut Map<String, Value>) -> Result<BTreeMap<String, bool>, E> {
  let lists = match fields.remove("mailingLists") {
    Some(Value::Object(lists)) => lists,
    _ => return Ok(BTreeMap::new()),
  };

  lists
    .into_iter()
    .map(|(list_id, value)| match value {
      Value::Bool(subscribed) => Ok((list_id, subscribed)),
      other => Err(wrong_type(&format!("mailingLists.{}", list_id), "a boolean", &other)),
    })
    .collect()
}

fn wrong_type<E: de::Error>(field: &str, expected: &str, found: &Value) -> E {
  E::custom(format!("invalid type for field `{}`: expected {}, found {}", field, expected, json_kind(found)))
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Addresses a single contact by exactly one of email or user ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactIdentifier {
  /// The contact's email address
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  /// The contact's external user ID
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,
}

impl ContactIdentifier {
  /// Identify a contact by email address
  pub fn email(email: impl Into<String>) -> Self {
    ContactIdentifier { email: Some(email.into()), user_id: None }
  }

  /// Identify a contact by external user ID
  pub fn user_id(user_id: impl Into<String>) -> Self {
    ContactIdentifier { email: None, user_id: Some(user_id.into()) }
  }
}
