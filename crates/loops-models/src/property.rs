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

//! Contact property definitions

use serde::{Deserialize, Serialize};

/// Data type of a contact property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
  String,
  Number,
  Boolean,
  Date,
  /// A type this client does not know about yet
  #[serde(other)]
  Unknown,
}

impl std::fmt::Display for PropertyType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PropertyType::String => write!(f, "string"),
      PropertyType::Number => write!(f, "number"),
      PropertyType::Boolean => write!(f, "boolean"),
      PropertyType::Date => write!(f, "date"),
      PropertyType::Unknown => write!(f, "unknown"),
    }
  }
}

impl std::str::FromStr for PropertyType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "string" => Ok(PropertyType::String),
      "number" => Ok(PropertyType::Number),
      "boolean" => Ok(PropertyType::Boolean),
      "date" => Ok(PropertyType::Date),
      other => Err(format!("unknown property type: {}", other)),
    }
  }
}

/// A contact property, either built in or team-defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProperty {
  /// The property's name key
  pub key: String,

  /// The human-friendly label for this property
  pub label: String,

  /// The property's data type
  #[serde(rename = "type")]
  pub property_type: PropertyType,
}

/// Payload for creating a custom contact property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPropertyCreate {
  /// Name of the property, in camelCase
  pub name: String,

  #[serde(rename = "type")]
  pub property_type: PropertyType,
}

/// Which contact properties to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertyFilter {
  /// Built-in and custom properties
  #[default]
  All,
  /// Only the team's custom properties
  Custom,
}

impl PropertyFilter {
  /// Value of the `list` query parameter, if one is sent
  pub fn as_query(&self) -> Option<&'static str> {
    match self {
      PropertyFilter::All => None,
      PropertyFilter::Custom => Some("custom"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_contact_property_decoding() {
    let props: Vec<ContactProperty> = serde_json::from_value(json!([
      {"key": "role", "label": "Role", "type": "string"},
      {"key": "signupAt", "label": "Signup", "type": "timestamp"}
    ]))
    .unwrap();
    assert_eq!(props[0].property_type, PropertyType::String);
    assert_eq!(props[1].property_type, PropertyType::Unknown);
  }

  #[test]
  fn test_create_payload() {
    let create = ContactPropertyCreate { name: "planName".to_string(), property_type: PropertyType::String };
    assert_eq!(serde_json::to_value(&create).unwrap(), json!({"name": "planName", "type": "string"}));
  }

  #[test]
  fn test_property_type_from_str() {
    assert_eq!("Boolean".parse::<PropertyType>().unwrap(), PropertyType::Boolean);
    assert!("blob".parse::<PropertyType>().is_err());
  }

  #[test]
  fn test_filter_query() {
    assert_eq!(PropertyFilter::default().as_query(), None);
    assert_eq!(PropertyFilter::Custom.as_query(), Some("custom"));
  }
}
