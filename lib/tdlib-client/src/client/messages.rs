// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages.

use tdlib_types::{enums, functions, types};

use super::Client;
use crate::InvocationError;

/// Wraps plain text as the content of a message, without any formatting.
pub(crate) fn plain_text(text: &str) -> enums::InputMessageContent {
    types::InputMessageText {
        text: types::FormattedText {
            text: text.to_string(),
            entities: Vec::new(),
        },
        disable_web_page_preview: false,
        clear_draft: false,
    }
    .into()
}

impl Client {
    /// Sends a message to the desired chat.
    ///
    /// The returned message is only a local copy. TDLib sends `updateMessageSendSucceeded`
    /// once the server has accepted it.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(chat_id: i64, client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use tdlib_types::types;
    ///
    /// let text = client.parse_markdown("**bold** text")?;
    /// client.send_message(chat_id, types::InputMessageText {
    ///     text,
    ///     disable_web_page_preview: true,
    ///     clear_draft: false,
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message<M: Into<enums::InputMessageContent>>(
        &self,
        chat_id: i64,
        message: M,
    ) -> Result<types::Message, InvocationError> {
        self.invoke(&functions::SendMessage {
            chat_id,
            message_thread_id: 0,
            reply_to: None,
            options: None,
            reply_markup: None,
            input_message_content: message.into(),
        })
        .await
        .map(Into::into)
    }

    /// Sends a plain text message to the desired chat.
    pub async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<types::Message, InvocationError> {
        self.send_message(chat_id, plain_text(text)).await
    }

    /// Edits the text of a message previously sent.
    pub async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: types::FormattedText,
    ) -> Result<types::Message, InvocationError> {
        self.invoke(&functions::EditMessageText {
            chat_id,
            message_id,
            reply_markup: None,
            input_message_content: types::InputMessageText {
                text,
                disable_web_page_preview: false,
                clear_draft: false,
            }
            .into(),
        })
        .await
        .map(Into::into)
    }

    /// Deletes the messages, for everyone if `revoke` is set.
    pub async fn delete_messages(
        &self,
        chat_id: i64,
        message_ids: &[i64],
        revoke: bool,
    ) -> Result<(), InvocationError> {
        self.invoke(&functions::DeleteMessages {
            chat_id,
            message_ids: message_ids.to_vec(),
            revoke,
        })
        .await
        .map(drop)
    }

    /// Fetches the messages with the given identifiers.
    ///
    /// The result has the same length as the input, and messages that
    /// could not be found are `None`.
    pub async fn get_messages(
        &self,
        chat_id: i64,
        message_ids: &[i64],
    ) -> Result<Vec<Option<types::Message>>, InvocationError> {
        let messages: types::Messages = self
            .invoke(&functions::GetMessages {
                chat_id,
                message_ids: message_ids.to_vec(),
            })
            .await?
            .into();
        Ok(messages.messages)
    }

    /// Fetches up to `limit` messages of the chat, starting from `from_message_id`
    /// (or the last message, if zero) and going back in time.
    ///
    /// TDLib may return fewer messages than requested even if there are more.
    pub async fn get_chat_history(
        &self,
        chat_id: i64,
        from_message_id: i64,
        limit: i32,
    ) -> Result<Vec<types::Message>, InvocationError> {
        let messages: types::Messages = self
            .invoke(&functions::GetChatHistory {
                chat_id,
                from_message_id,
                offset: 0,
                limit,
                only_local: false,
            })
            .await?
            .into();
        Ok(messages.messages.into_iter().flatten().collect())
    }

    /// Parses Markdown (version 2) into text with entities, without involving the network.
    pub fn parse_markdown(&self, text: &str) -> Result<types::FormattedText, InvocationError> {
        self.parse_text(text, enums::TextParseMode::Markdown(types::TextParseModeMarkdown {
            version: 2,
        }))
    }

    /// Parses HTML into text with entities, without involving the network.
    pub fn parse_html(&self, text: &str) -> Result<types::FormattedText, InvocationError> {
        self.parse_text(text, enums::TextParseMode::Html)
    }

    fn parse_text(
        &self,
        text: &str,
        parse_mode: enums::TextParseMode,
    ) -> Result<types::FormattedText, InvocationError> {
        self.execute(&functions::ParseTextEntities {
            text: text.to_string(),
            parse_mode,
        })
        .map(Into::into)
    }
}
