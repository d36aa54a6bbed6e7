//! Example to echo user text messages. Updates are handled concurrently.
//!
//! The `TG_ID` and `TG_HASH` environment variables must be set (learn how to do it for
//! [Windows](https://ss64.com/nt/set.html) or [Linux](https://ss64.com/bash/export.html))
//! to Telegram's API ID and API hash respectively.
//!
//! Then, run it as:
//!
//! ```sh
//! cargo run --example echo --features tdjson -- BOT_TOKEN
//! ```

use std::env;

use simple_logger::SimpleLogger;
use tdlib_client::td::{enums, functions, types};
use tdlib_client::{Client, Dispatcher, TdJson};
use tokio::runtime;
use tokio::task::JoinSet;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;
type HandlerResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

const DATABASE_DIRECTORY: &str = "echo-db";

async fn handle_update(client: Client, token: String, update: enums::Update) -> HandlerResult {
    match update {
        enums::Update::AuthorizationState(update) => match update.authorization_state {
            enums::AuthorizationState::WaitTdlibParameters => {
                client
                    .set_tdlib_parameters(functions::SetTdlibParameters {
                        use_test_dc: false,
                        database_directory: DATABASE_DIRECTORY.to_string(),
                        files_directory: String::new(),
                        database_encryption_key: String::new(),
                        use_file_database: false,
                        use_chat_info_database: false,
                        use_message_database: false,
                        use_secret_chats: false,
                        api_id: env!("TG_ID").parse()?,
                        api_hash: env!("TG_HASH").to_string(),
                        system_language_code: "en".to_string(),
                        device_model: "Desktop".to_string(),
                        system_version: String::new(),
                        application_version: env!("CARGO_PKG_VERSION").to_string(),
                    })
                    .await?;
            }
            enums::AuthorizationState::WaitPhoneNumber => {
                println!("Signing in...");
                let me = client.bot_sign_in(&token).await?;
                println!("Signed in as {}!", me.first_name);
            }
            enums::AuthorizationState::Ready => println!("Waiting for messages..."),
            _ => {}
        },
        enums::Update::NewMessage(update) if !update.message.is_outgoing => {
            if let enums::MessageContent::MessageText(content) = update.message.content {
                println!("Responding to chat {}", update.message.chat_id);
                client
                    .send_message(
                        update.message.chat_id,
                        types::InputMessageText {
                            text: content.text,
                            disable_web_page_preview: false,
                            clear_draft: false,
                        },
                    )
                    .await?;
            }
        }
        _ => {}
    }
    Ok(())
}

async fn async_main() -> Result {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let token = env::args().nth(1).expect("token missing");

    let tdjson = TdJson::new().ok_or("failed to create tdjson client")?;
    let Dispatcher {
        runner,
        handle,
        updates,
    } = Dispatcher::new(tdjson);
    let client = Client::new(handle);
    client.execute(&functions::SetLogVerbosityLevel {
        new_verbosity_level: 1,
    })?;
    let runner_task = tokio::spawn(runner.run());

    // This example spawns a task to handle each update.
    // To guarantee that all handlers run to completion, they're stored in this set.
    let mut handler_tasks = JoinSet::new();
    let mut updates = client.stream_updates(updates);
    while let Some(update) = updates.next().await {
        while let Some(result) = handler_tasks.try_join_next() {
            if let Ok(Err(e)) = result {
                println!("Failed to handle update! {e}");
            }
        }
        handler_tasks.spawn(handle_update(client.clone(), token.clone(), update));
    }

    let _ = runner_task.await;
    while handler_tasks.join_next().await.is_some() {}

    Ok(())
}

fn main() -> Result {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main())
}
