// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to deal with and offer access to updates.

use log::debug;
use tdlib_types::enums;
use tokio::sync::mpsc;

use super::Client;
use crate::UpdateLike;

/// Sequential access to the updates sent by TDLib.
///
/// Updates which could not be decoded are skipped.
pub struct UpdateStream {
    updates: mpsc::UnboundedReceiver<UpdateLike>,
}

impl UpdateStream {
    /// Returns the next update, or `None` once TDLib has closed
    /// or the [`crate::DispatcherRunner`] stopped running.
    pub async fn next(&mut self) -> Option<enums::Update> {
        loop {
            match self.updates.recv().await? {
                UpdateLike::Update(update) => return Some(*update),
                UpdateLike::Unrecognized(update) => {
                    debug!("skipping unrecognized update: {update}");
                }
                UpdateLike::Closed => return None,
            }
        }
    }
}

impl Client {
    /// Returns an asynchronous stream of updates.
    ///
    /// The updates are those of the [`crate::Dispatcher`] this client was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdlib_client::Client, updates: tokio::sync::mpsc::UnboundedReceiver<tdlib_client::UpdateLike>) {
    /// use tdlib_types::enums::Update;
    ///
    /// let mut updates = client.stream_updates(updates);
    /// while let Some(update) = updates.next().await {
    ///     if let Update::NewMessage(new_message) = update {
    ///         println!("New message in {}", new_message.message.chat_id);
    ///     }
    /// }
    /// # }
    /// ```
    pub fn stream_updates(&self, updates: mpsc::UnboundedReceiver<UpdateLike>) -> UpdateStream {
        UpdateStream { updates }
    }
}
