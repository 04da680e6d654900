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
pub mod contacts;
pub mod events;
pub mod mailing_lists;
pub mod properties;
pub mod transactional;

use loops_core::{Error, Result};

/// Require exactly one of `email` / `user_id`
///
/// Runs before any request is built, so a rejected identity never reaches
/// the network.
pub(crate) fn require_single_identity(email: Option<&str>, user_id: Option<&str>, subject: &str) -> Result<()> {
  match (email, user_id) {
    (None, None) => Err(Error::Validation(format!("{} must contain either an email or a userId", subject))),
    (Some(_), Some(_)) => Err(Error::Validation(format!(
      "{} must contain either an email or a userId, but not both",
      subject
    ))),
    _ => Ok(()),
  }
}
