// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use crate::DispatcherHandle;

pub(crate) struct ClientInner {
    pub(crate) handle: DispatcherHandle,
    pub(crate) configuration: ClientConfiguration,
}

/// Wrapper around [`Dispatcher`] to facilitate interaction with TDLib's API.
///
/// This structure is the "entry point" of the library, from which you can start using the rest.
///
/// It has implementations for the most common requests, such as signing in, getting chats,
/// or sending messages. Everything else can be sent with [`Client::invoke`].
///
/// Cloning it is cheap, and all clones share the same [`Dispatcher`].
///
/// [`Dispatcher`]: crate::Dispatcher
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

/// Configuration that controls the [`Client`] behaviour when making requests.
pub struct ClientConfiguration {
    /// The retry policy to use when encountering errors after invoking a request.
    pub retry_policy: Box<dyn super::RetryPolicy>,
}

impl Default for ClientConfiguration {
    /// Returns an instance with an [`AutoSleep`] retry policy with a threshold of one minute.
    ///
    /// [`AutoSleep`]: super::AutoSleep
    fn default() -> Self {
        Self {
            retry_policy: Box::new(super::AutoSleep::default()),
        }
    }
}
