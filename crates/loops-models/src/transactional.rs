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

//! Transactional email sends and published templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A transactional email to send to one recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionalEmail {
  /// The ID of the transactional email to send
  pub transactional_id: String,

  /// The email address of the recipient
  pub email: String,

  /// Create a contact with this email if one does not exist yet
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub add_to_audience: Option<bool>,

  /// Data variables as defined by the email template
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data_variables: Option<Map<String, Value>>,

  /// Files sent along with the email
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attachments: Option<Vec<EmailAttachment>>,
}

impl TransactionalEmail {
  pub fn new(transactional_id: impl Into<String>, email: impl Into<String>) -> Self {
    TransactionalEmail {
      transactional_id: transactional_id.into(),
      email: email.into(),
      ..TransactionalEmail::default()
    }
  }

  /// Add a template data variable
  pub fn with_data_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.data_variables.get_or_insert_with(Map::new).insert(key.into(), value.into());
    self
  }

  pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
    self.attachments.get_or_insert_with(Vec::new).push(attachment);
    self
  }
}

/// A file attached to a transactional email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAttachment {
  /// The name of the file, shown in email clients
  pub filename: String,

  /// The MIME type of the file
  pub content_type: String,

  /// The base64-encoded content of the file
  pub data: String,
}

/// One page of published transactional emails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionalEmailList {
  #[serde(default)]
  pub pagination: Pagination,

  #[serde(default)]
  pub data: Vec<TransactionalTemplate>,
}

/// Cursor pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
  pub total_results: u32,
  pub returned_results: u32,
  pub per_page: u32,
  pub total_pages: u32,
  /// Pass as `cursor` to fetch the next page; absent on the last page
  pub next_cursor: Option<String>,
  pub next_page: Option<String>,
}

/// A published transactional email template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionalTemplate {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub last_updated: Option<DateTime<Utc>>,
  /// Names of the data variables the template expects
  #[serde(default)]
  pub data_variables: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_send_payload_omits_unset_fields() {
    let email = TransactionalEmail::new("cm3n2vjux00cgeyeflew9ly2w", "test@example.com")
      .with_data_variable("name", "Mr. Test");
    assert_eq!(
      serde_json::to_value(&email).unwrap(),
      json!({
        "transactionalId": "cm3n2vjux00cgeyeflew9ly2w",
        "email": "test@example.com",
        "dataVariables": {"name": "Mr. Test"}
      })
    );
  }

  #[test]
  fn test_attachments() {
    let email = TransactionalEmail { add_to_audience: Some(true), ..TransactionalEmail::new("t", "a@b.c") }
      .with_attachment(EmailAttachment {
        filename: "invoice.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        data: "JVBERi0=".to_string(),
      });
    let value = serde_json::to_value(&email).unwrap();
    assert_eq!(value["addToAudience"], true);
    assert_eq!(value["attachments"][0]["contentType"], "application/pdf");
  }

  #[test]
  fn test_list_decoding() {
    let list: TransactionalEmailList = serde_json::from_value(json!({
      "pagination": {
        "totalResults": 23,
        "returnedResults": 20,
        "perPage": 20,
        "totalPages": 2,
        "nextCursor": "clyo0q4wo01p59fsecyxqsh38",
        "nextPage": "https://app.loops.so/api/v1/transactional?cursor=clyo0q4wo01p59fsecyxqsh38&perPage=20"
      },
      "data": [{
        "id": "clfn0k1yg001imo0fdeqg30i8",
        "name": "Welcome email",
        "lastUpdated": "2023-11-06T17:48:07.249Z",
        "dataVariables": ["name"]
      }]
    }))
    .unwrap();

    assert_eq!(list.pagination.total_results, 23);
    assert_eq!(list.pagination.next_cursor.as_deref(), Some("clyo0q4wo01p59fsecyxqsh38"));
    assert_eq!(list.data[0].name, "Welcome email");
    assert!(list.data[0].last_updated.is_some());
    assert_eq!(list.data[0].data_variables, vec!["name".to_string()]);
  }
}
