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

pub mod account;
pub mod contact;
pub mod event;
pub mod property;
pub mod transactional;

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Pretty-print a response on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Parse `key=value`; the value is read as JSON when it parses, else as a string
pub fn parse_property(raw: &str) -> Result<(String, Value)> {
  let (key, value) = raw.split_once('=').ok_or_else(|| anyhow!("expected key=value, got '{}'", raw))?;
  let key = key.trim();
  if key.is_empty() {
    return Err(anyhow!("empty property name in '{}'", raw));
  }
  let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
  Ok((key.to_string(), value))
}

pub fn properties_map(raw: &[String]) -> Result<Map<String, Value>> {
  raw.iter().map(|p| parse_property(p)).collect()
}

/// Parse `listId` or `listId=false` into a subscription entry
pub fn parse_list(raw: &str) -> Result<(String, bool)> {
  match raw.split_once('=') {
    None => Ok((raw.to_string(), true)),
    Some((id, flag)) => {
      let subscribed = flag.parse::<bool>().map_err(|_| anyhow!("expected true or false for list {}, got '{}'", id, flag))?;
      Ok((id.to_string(), subscribed))
    }
  }
}

pub fn lists_map(raw: &[String]) -> Result<BTreeMap<String, bool>> {
  raw.iter().map(|l| parse_list(l)).collect()
}
