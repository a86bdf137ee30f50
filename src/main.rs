// src/main.rs - console transport
use chatcmd_plugins::core::constants::APP_TITLE;
use chatcmd_plugins::{create_handler, load_config, IncomingMessage, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

const SENDER_ENV: &str = "CHATCMD_SENDER";

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().await?;
    init_logger(&config.log_level);
    config.log_startup();

    let sender = std::env::var(SENDER_ENV).unwrap_or_else(|_| "console".to_string());
    let handler = create_handler(config);
    log::info!("{} ready ({})", APP_TITLE, handler.debug_info());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let message = IncomingMessage::new(sender.as_str(), line);
        let result = handler.handle_message(&message).await;
        if !result.message.is_empty() {
            println!("{}\n", result.message);
        }
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .init();
}
