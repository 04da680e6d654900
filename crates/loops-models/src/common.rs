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

//! Response envelopes shared by several Loops endpoints

use serde::{Deserialize, Serialize};

/// Returned by endpoints that create or update a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
  /// Whether the request was accepted
  #[serde(default)]
  pub success: bool,

  /// ID of the created or updated resource
  pub id: String,
}

/// Generic `{success, message}` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
  #[serde(default)]
  pub success: bool,

  #[serde(default)]
  pub message: String,
}

/// Bare `{success}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
  #[serde(default)]
  pub success: bool,
}

/// Failure body of the form `{"error": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  #[serde(default)]
  pub error: Option<String>,
}

/// Result of testing an API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyInfo {
  #[serde(default)]
  pub success: bool,

  /// Name of the team the API key belongs to
  pub team_name: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_message_response_tolerates_missing_fields() {
    let msg: MessageResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(msg.success);
    assert!(msg.message.is_empty());
  }

  #[test]
  fn test_error_response_requires_string() {
    let err: ErrorResponse = serde_json::from_str(r#"{"error": "bad request"}"#).unwrap();
    assert_eq!(err.error.as_deref(), Some("bad request"));

    assert!(serde_json::from_str::<ErrorResponse>(r#"{"error": {"code": 1}}"#).is_err());
  }

  #[test]
  fn test_api_key_info() {
    let info: ApiKeyInfo =
      serde_json::from_str(r#"{"success": true, "teamName": "Tilebox Staging"}"#).unwrap();
    assert_eq!(info.team_name, "Tilebox Staging");
  }
}
