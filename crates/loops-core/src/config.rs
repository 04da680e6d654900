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

//! Configuration management for the Loops client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the Loops client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Loops API key. Requests are sent unauthenticated when absent.
  pub api_key: Option<String>,

  /// Request timeout in seconds, applied by the default HTTP transport
  pub timeout_secs: u64,

  /// Base URL for the Loops API
  pub base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      api_key: None,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::LOOPS_BASE_URL.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads `LOOPS_API_KEY`, `LOOPS_BASE_URL` and `LOOPS_TIMEOUT_SECS`, after
  /// loading a `.env` file if one exists.
  pub fn from_env() -> Result<Self> {
    Self::from_env_with_base_url(None)
  }

  /// Like [`Config::from_env`], but `base_url` replaces `LOOPS_BASE_URL`
  /// when given; the environment value is then never read or validated.
  pub fn from_env_with_base_url(base_url: Option<String>) -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("LOOPS_API_KEY").ok().filter(|k| !k.is_empty());

    let timeout_secs = env::var("LOOPS_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid LOOPS_TIMEOUT_SECS".to_string()))?;

    let base_url = base_url
      .or_else(|| env::var("LOOPS_BASE_URL").ok())
      .unwrap_or_else(|| crate::LOOPS_BASE_URL.to_string());

    let config = Config { api_key, timeout_secs, base_url };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values and the given API key
  pub fn with_api_key(api_key: impl Into<String>) -> Self {
    Config { api_key: Some(api_key.into()), ..Config::default() }
  }

  /// Check that the base URL can be used to resolve API paths
  pub fn validate(&self) -> Result<()> {
    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("invalid api url {}: {}", self.base_url, e)))?;
    if url.cannot_be_a_base() {
      return Err(Error::Config(format!("api url {} cannot be used as a base", self.base_url)));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api_key, None);
    assert_eq!(config.base_url, "https://app.loops.so/api/v1/");
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_with_api_key() {
    let config = Config::with_api_key("test_key");
    assert_eq!(config.api_key.as_deref(), Some("test_key"));
    assert_eq!(config.base_url, crate::LOOPS_BASE_URL);
  }

  #[test]
  fn test_validate_rejects_bad_urls() {
    let config = Config { base_url: "not a url".to_string(), ..Config::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    let config = Config { base_url: "mailto:team@example.com".to_string(), ..Config::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
  }

  // The only test in this crate that touches the process environment
  #[test]
  fn test_base_url_override_skips_env_value() {
    env::set_var("LOOPS_BASE_URL", "not a url");

    let config = Config::from_env_with_base_url(Some("https://example.com/api/v1/".to_string())).unwrap();
    assert_eq!(config.base_url, "https://example.com/api/v1/");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{:?}", err);

    env::remove_var("LOOPS_BASE_URL");
  }

  #[test]
  fn test_config_serde() {
    let config = Config::with_api_key("k");
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
  }
}
