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

//! # loops-client
//!
//! An async client for the [Loops](https://loops.so) email API.
//!
//! ## Features
//!
//! - **Typed endpoints**: contacts, mailing lists, events, transactional
//!   email, contact properties, API key checks and sending IPs
//! - **Custom properties**: contacts carry team-defined properties inline,
//!   exactly as the API expects
//! - **Interceptors**: mutate every outgoing request (auth, tracing headers)
//! - **Swappable transport**: replace the `reqwest` transport with fixtures
//! - **Cancellation**: every call takes a [`RequestContext`] with an optional
//!   cancellation token and deadline
//!
//! ## Usage
//!
//! ```rust,no_run
//! use loops_client::{ContactIdentifier, LoopsClient, RequestContext};
//! use loops_core::Config;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let client = LoopsClient::new(Config::from_env()?)?;
//!   let ctx = RequestContext::new().with_timeout(Duration::from_secs(10));
//!
//!   let contact = client.contacts().find(&ctx, &ContactIdentifier::email("neil.armstrong@moon.space")).await?;
//!   println!("{} subscribed: {}", contact.email, contact.subscribed);
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, loops_core::Error>`. Server-side rejections
//! are `Error::Api` with the server's message; a lookup that matches nothing
//! is `Error::NotFound`; bad arguments are `Error::Validation` and never reach
//! the network.

#![warn(clippy::all)]

pub mod client;
pub mod context;
pub mod endpoints;
pub mod interceptor;
pub mod transport;

// Re-export the main client and common types
pub use client::{ClientOptions, LoopsClient};
pub use context::RequestContext;
pub use interceptor::{BearerAuth, JsonContentType, RequestInterceptor};
pub use loops_core::{Config, Error, Result};
pub use loops_models::*;
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  account::AccountEndpoints,
  contacts::ContactEndpoints,
  events::EventEndpoints,
  mailing_lists::MailingListEndpoints,
  properties::PropertyEndpoints,
  transactional::{ListTransactionalOptions, TransactionalEndpoints, PER_PAGE_RANGE},
};
