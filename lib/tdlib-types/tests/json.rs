// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde_json::{json, Value};
use tdlib_types::{class_of, enums, from_value, functions, to_request, types, Identifiable};

fn login_code_message() -> Value {
    json!({
        "@type": "message",
        "id": 1048576,
        "sender_id": {"@type": "messageSenderUser", "user_id": 777000},
        "chat_id": 777000,
        "is_outgoing": false,
        "is_pinned": false,
        "can_be_edited": false,
        "can_be_forwarded": true,
        "date": 1700000000,
        "edit_date": 0,
        "message_thread_id": 0,
        "via_bot_user_id": 0,
        "author_signature": "",
        "media_album_id": "0",
        "restriction_reason": "",
        "content": {
            "@type": "messageText",
            "text": {
                "@type": "formattedText",
                "text": "Login code: 12345",
                "entities": [{
                    "@type": "textEntity",
                    "offset": 12,
                    "length": 5,
                    "type": {"@type": "textEntityTypeBold"}
                }]
            }
        }
    })
}

#[test]
fn authorization_state_update() {
    let update: enums::Update = from_value(json!({
        "@type": "updateAuthorizationState",
        "authorization_state": {"@type": "authorizationStateWaitTdlibParameters"},
        "@client_id": 1
    }))
    .unwrap();

    assert_eq!(
        update,
        enums::Update::AuthorizationState(types::UpdateAuthorizationState {
            authorization_state: enums::AuthorizationState::WaitTdlibParameters,
        })
    );
    assert_eq!(update.constructor_name(), "updateAuthorizationState");
}

#[test]
fn password_state_keeps_its_fields() {
    let state: enums::AuthorizationState = from_value(json!({
        "@type": "authorizationStateWaitPassword",
        "password_hint": "pet name",
        "has_recovery_email_address": true,
        "recovery_email_address_pattern": ""
    }))
    .unwrap();

    match state {
        enums::AuthorizationState::WaitPassword(state) => {
            assert_eq!(state.password_hint, "pet name");
            assert!(state.has_recovery_email_address);
            // Left out by the sender, so it takes its zero value.
            assert!(!state.has_passport_data);
        }
        state => panic!("unexpected state: {state:?}"),
    }
}

#[test]
fn new_message_update() {
    let update: enums::Update = from_value(json!({
        "@type": "updateNewMessage",
        "message": login_code_message()
    }))
    .unwrap();

    let enums::Update::NewMessage(update) = update else {
        panic!("wrong update");
    };
    let message = update.message;
    assert_eq!(message.id, 1048576);
    assert_eq!(
        message.sender_id,
        enums::MessageSender::User(types::MessageSenderUser { user_id: 777000 })
    );
    assert_eq!(message.forward_info, None);
    assert_eq!(message.reply_markup, None);

    let text = types::MessageText::try_from(message.content).unwrap();
    assert_eq!(text.text.text, "Login code: 12345");
    assert_eq!(
        text.text.entities,
        vec![types::TextEntity {
            offset: 12,
            length: 5,
            r#type: enums::TextEntityType::Bold,
        }]
    );
}

#[test]
fn new_chat_update() {
    let update: enums::Update = from_value(json!({
        "@type": "updateNewChat",
        "chat": {
            "@type": "chat",
            "id": -1001234567890i64,
            "type": {"@type": "chatTypeSupergroup", "supergroup_id": 1234567890, "is_channel": true},
            "title": "News",
            "permissions": {"@type": "chatPermissions", "can_send_basic_messages": false},
            "positions": [{
                "@type": "chatPosition",
                "list": {"@type": "chatListMain"},
                "order": "9221294784512000005",
                "is_pinned": false
            }],
            "notification_settings": {
                "@type": "chatNotificationSettings",
                "use_default_mute_for": true,
                "mute_for": 0,
                "sound_id": "-1"
            },
            "client_data": ""
        }
    }))
    .unwrap();

    let enums::Update::NewChat(types::UpdateNewChat { chat }) = update else {
        panic!("wrong update");
    };
    assert_eq!(chat.id, -1001234567890);
    assert_eq!(
        chat.r#type,
        enums::ChatType::Supergroup(types::ChatTypeSupergroup {
            supergroup_id: 1234567890,
            is_channel: true,
        })
    );
    assert_eq!(chat.photo, None);
    assert_eq!(chat.positions[0].list, enums::ChatList::Main);
    assert_eq!(chat.positions[0].order, 9221294784512000005);
    assert_eq!(chat.notification_settings.sound_id, -1);
}

#[test]
fn unknown_type_is_an_error() {
    let err = from_value::<enums::Update>(json!({
        "@type": "updateStoryDeleted",
        "story_sender_chat_id": 1,
        "story_id": 2
    }))
    .unwrap_err();
    assert!(err.to_string().contains("updateStoryDeleted"), "{err}");

    assert!(from_value::<enums::Update>(json!({"chat_id": 1})).is_err());
}

#[test]
fn objects_of_a_class_carry_their_type() {
    let sender = enums::MessageSender::Chat(types::MessageSenderChat { chat_id: -100 });
    assert_eq!(
        serde_json::to_value(&sender).unwrap(),
        json!({"@type": "messageSenderChat", "chat_id": -100})
    );
    assert_eq!(
        serde_json::to_value(enums::ChatList::Archive).unwrap(),
        json!({"@type": "chatListArchive"})
    );
}

#[test]
fn int64_fields_are_strings() {
    let option = enums::OptionValue::Integer(types::OptionValueInteger {
        value: 1234567890123,
    });
    assert_eq!(
        serde_json::to_value(&option).unwrap(),
        json!({"@type": "optionValueInteger", "value": "1234567890123"})
    );

    let update: enums::Update = from_value(json!({
        "@type": "updateInstalledStickerSets",
        "sticker_type": {"@type": "stickerTypeRegular"},
        "sticker_set_ids": ["5379012345678901234", "1"]
    }))
    .unwrap();
    assert_eq!(
        update,
        enums::Update::InstalledStickerSets(types::UpdateInstalledStickerSets {
            sticker_type: enums::StickerType::Regular,
            sticker_set_ids: vec![5379012345678901234, 1],
        })
    );
}

#[test]
fn missing_messages_are_null() {
    let messages: enums::Messages = from_value(json!({
        "@type": "messages",
        "total_count": 2,
        "messages": [null, login_code_message()]
    }))
    .unwrap();

    let messages = types::Messages::from(messages);
    assert_eq!(messages.total_count, 2);
    assert_eq!(messages.messages[0], None);
    assert_eq!(
        messages.messages[1].as_ref().map(|m| m.chat_id),
        Some(777000)
    );
}

#[test]
fn recursive_classes_are_boxed() {
    let text: enums::RichText = from_value(json!({
        "@type": "richTextBold",
        "text": {
            "@type": "richTextUrl",
            "text": {"@type": "richTextPlain", "text": "docs"},
            "url": "https://core.telegram.org/tdlib",
            "is_cached": false
        }
    }))
    .unwrap();

    let enums::RichText::Bold(bold) = text else {
        panic!("wrong rich text");
    };
    let enums::RichText::Url(url) = bold.text else {
        panic!("wrong rich text");
    };
    assert_eq!(url.url, "https://core.telegram.org/tdlib");
    assert_eq!(
        url.text,
        enums::RichText::Plain(types::RichTextPlain {
            text: "docs".into()
        })
    );
}

#[test]
fn send_message_request() {
    let request = to_request(&functions::SendMessage {
        chat_id: 42,
        message_thread_id: 0,
        reply_to: None,
        options: None,
        reply_markup: None,
        input_message_content: enums::InputMessageContent::InputMessageText(
            types::InputMessageText {
                text: types::FormattedText {
                    text: "hello".into(),
                    entities: Vec::new(),
                },
                disable_web_page_preview: false,
                clear_draft: true,
            },
        ),
    })
    .unwrap();

    assert_eq!(
        request,
        json!({
            "@type": "sendMessage",
            "chat_id": 42,
            "message_thread_id": 0,
            "input_message_content": {
                "@type": "inputMessageText",
                "text": {"text": "hello", "entities": []},
                "disable_web_page_preview": false,
                "clear_draft": true
            }
        })
    );
}

#[test]
fn optional_arguments_are_sent_when_present() {
    let request = to_request(&functions::GetChats {
        chat_list: Some(enums::ChatList::Archive),
        limit: 20,
    })
    .unwrap();
    assert_eq!(
        request,
        json!({
            "@type": "getChats",
            "chat_list": {"@type": "chatListArchive"},
            "limit": 20
        })
    );
}

#[test]
fn conversions_between_types_and_enums() {
    let state = enums::AuthorizationState::from(types::AuthorizationStateReady {});
    assert_eq!(state, enums::AuthorizationState::Ready);
    assert_eq!(state.constructor_name(), types::AuthorizationStateReady::TYPE_NAME);

    assert!(types::AuthorizationStateReady::try_from(state.clone()).is_ok());
    assert_eq!(
        types::AuthorizationStateClosed::try_from(state),
        Err(tdlib_types::errors::UnexpectedConstructor {
            expected: "authorizationStateClosed",
            found: "authorizationStateReady",
        })
    );
}

#[test]
fn classes_of_definitions() {
    assert_eq!(class_of("updateNewChat"), Some("Update"));
    assert_eq!(class_of("chatListMain"), Some("ChatList"));
    assert_eq!(class_of("getChatHistory"), Some("Messages"));
    assert_eq!(class_of("boolTrue"), None);
    assert_eq!(class_of("updateStoryDeleted"), None);
}

#[test]
fn errors_are_objects_too() {
    let error: enums::Error = from_value(json!({
        "@type": "error",
        "code": 429,
        "message": "Too Many Requests: retry after 7"
    }))
    .unwrap();
    let types::Error { code, message } = error.into();
    assert_eq!(code, 429);
    assert!(message.ends_with("retry after 7"));
}
