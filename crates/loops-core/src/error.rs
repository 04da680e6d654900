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

use thiserror::Error;

/// The main error type for loops-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error (malformed base URL, path or settings)
  #[error("Configuration error: {0}")]
  Config(String),

  /// Caller-supplied parameters were rejected before any request was sent
  #[error("Validation error: {0}")]
  Validation(String),

  /// Request body could not be serialized
  #[error("Encoding error: {0}")]
  Encode(String),

  /// Response body did not match the expected shape
  #[error("Decoding error: {0}")]
  Decode(String),

  /// Network failure, timeout or cancellation
  #[error("Transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The API answered with a failure status.
  ///
  /// `message` is the server-provided text, or the raw body when the server
  /// sent nothing recognisable.
  #[error("{message}")]
  Api { status: u16, message: String },

  /// A lookup succeeded but matched nothing
  #[error("{0} not found")]
  NotFound(String),
}

impl Error {
  /// Wrap any error (or message) as a transport failure
  pub fn transport<E>(source: E) -> Self
  where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
  {
    Error::Transport(source.into())
  }

  /// True for [`Error::NotFound`]
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }

  /// True for [`Error::Validation`]
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::Validation(_))
  }

  /// True when the server itself rejected the request
  pub fn is_remote(&self) -> bool {
    matches!(self, Error::Api { .. })
  }

  /// HTTP status of a remote failure, if this is one
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for loops-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_displays_server_message_verbatim() {
    let err = Error::Api { status: 400, message: "bad request".to_string() };
    assert_eq!(err.to_string(), "bad request");
    assert_eq!(err.status(), Some(400));
    assert!(err.is_remote());
  }

  #[test]
  fn test_transport_keeps_source() {
    let err = Error::transport("request cancelled");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(err.to_string(), "Transport error: request cancelled");
    assert_eq!(err.status(), None);
  }

  #[test]
  fn test_not_found_message() {
    let err = Error::NotFound("contact".to_string());
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "contact not found");
  }
}
