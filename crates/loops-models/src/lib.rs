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

//! # loops-models
//!
//! Data models for Loops API requests and responses.
//!
//! ## Features
//!
//! - **Inlined custom properties**: [`Contact`] keeps team-defined properties
//!   in a map while reading and writing them as top-level JSON keys
//! - **Serde Integration**: Built-in serialization/deserialization
//! - **Lenient decoding**: unknown fields and new property types do not break
//!   older clients
//!
//! ## Usage
//!
//! ```ignore
//! use loops_models::Contact;
//!
//! let contact: Contact = serde_json::from_str(&response_json)?;
//! println!("{:?}", contact.custom_properties.get("companyRole"));
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod contact;
pub mod event;
pub mod mailing_list;
pub mod property;
pub mod transactional;

pub use common::*;
pub use contact::*;
pub use event::*;
pub use mailing_list::*;
pub use property::*;
pub use transactional::*;
