// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library is a high-level client to interact with [TDLib] through its JSON API.
//!
//! A [`Dispatcher`] owns the [`Transport`] leading to a TDLib instance. Its runner
//! must be spawned so that responses reach the [`Client`] that made the request,
//! and everything else is delivered as an update:
//!
//! ```no_run
//! # #[cfg(feature = "tdjson")]
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! use tdlib_client::{Client, Dispatcher, TdJson};
//!
//! let Dispatcher { runner, handle, updates } = Dispatcher::new(TdJson::new().unwrap());
//! let client = Client::new(handle);
//! tokio::spawn(runner.run());
//!
//! let mut updates = client.stream_updates(updates);
//! while let Some(update) = updates.next().await {
//!     println!("{}", update.constructor_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Flood errors
//!
//! TDLib answers with `429 Too Many Requests: retry after N` when a method has been
//! called too much in a certain period of time. Because they are expected, the default
//! [`ClientConfiguration`] will sleep on small flood errors to prevent interruption of
//! simple scripts.
//!
//! # Re-exports
//!
//! ## tdlib-types as td
//!
//! This crate is re-exported wholesale under the [`td`] namespace. All of TDLib's
//! types and functions are generated from its schema, so if the [`Client`] is missing
//! a method to do what you need, you may directly [`Client::invoke`] any of the
//! [`td::functions`], or build the JSON yourself and use [`Client::send_and_catch`].
//!
//! # Features
//!
//! * `tdjson`: links against the native `tdjson` library and enables `TdJson`.
//!
//! [TDLib]: https://core.telegram.org/tdlib

#![deny(unsafe_code)]

pub mod client;
mod dispatcher;
mod errors;
#[cfg(feature = "tdjson")]
mod tdjson;
mod transport;

pub use client::{Client, ClientConfiguration, PasswordToken, SignInError, UpdateStream};
pub use dispatcher::{
    Dispatcher, DispatcherConfiguration, DispatcherHandle, DispatcherRunner, UpdateLike,
};
pub use errors::{InvocationError, TdError};
#[cfg(feature = "tdjson")]
pub use tdjson::TdJson;
pub use transport::Transport;

pub use tdlib_types as td;
