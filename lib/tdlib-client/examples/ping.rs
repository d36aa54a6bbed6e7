//! This example squares a number through TDLib's test functions, and that's it.
//!
//! ```sh
//! cargo run --example ping --features tdjson
//! ```

use tdlib_client::td::functions;
use tdlib_client::{Client, Dispatcher, TdJson};
use tokio::runtime;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

async fn async_main() -> Result {
    let tdjson = TdJson::new().ok_or("failed to create tdjson client")?;
    let Dispatcher { runner, handle, .. } = Dispatcher::new(tdjson);
    let client = Client::new(handle);

    // Silence TDLib's own logging before it starts printing.
    client.execute(&functions::SetLogVerbosityLevel {
        new_verbosity_level: 1,
    })?;

    let runner_task = tokio::spawn(runner.run());

    println!("Sending ping...");
    dbg!(client.invoke(&functions::TestSquareInt { x: 7 }).await?);
    println!("Ping sent successfully!");

    // Runner's `run()` won't finish until all handles are dropped or quit is called.
    drop(client);
    let _ = runner_task.await;

    Ok(())
}

fn main() -> Result {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main())
}
