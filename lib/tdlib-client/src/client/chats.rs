// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to chats and their lists.

use tdlib_types::{enums, functions, types};

use super::Client;
use crate::InvocationError;

impl Client {
    /// Fetches the chat with the given identifier.
    ///
    /// This is an offline request for users: the chat must have been seen before,
    /// through an update or a previous request.
    pub async fn get_chat(&self, chat_id: i64) -> Result<types::Chat, InvocationError> {
        self.invoke(&functions::GetChat { chat_id }).await.map(Into::into)
    }

    /// Resolves a public chat by its username, such as `"telegram"`.
    pub async fn resolve_username(&self, username: &str) -> Result<types::Chat, InvocationError> {
        self.invoke(&functions::SearchPublicChat {
            username: username.to_string(),
        })
        .await
        .map(Into::into)
    }

    /// Loads up to `limit` more chats from the main list.
    ///
    /// The chats themselves arrive through updates. Returns `false` once
    /// every chat has been loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// while client.load_chats(100).await? {}
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load_chats(&self, limit: i32) -> Result<bool, InvocationError> {
        match self
            .invoke(&functions::LoadChats {
                chat_list: Some(enums::ChatList::Main),
                limit,
            })
            .await
        {
            Ok(_) => Ok(true),
            Err(InvocationError::Td(e)) if e.code == 404 => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Returns the identifiers of the first `limit` chats of the main list, in order.
    pub async fn get_chats(&self, limit: i32) -> Result<Vec<i64>, InvocationError> {
        let chats: types::Chats = self
            .invoke(&functions::GetChats {
                chat_list: Some(enums::ChatList::Main),
                limit,
            })
            .await?
            .into();
        Ok(chats.chat_ids)
    }

    /// Returns the private chat with the given user, creating it if needed.
    pub async fn create_private_chat(&self, user_id: i64) -> Result<types::Chat, InvocationError> {
        self.invoke(&functions::CreatePrivateChat {
            user_id,
            force: false,
        })
        .await
        .map(Into::into)
    }
}
