// Module definitions
pub mod commands;
pub mod core;

// Essential re-exports
pub use commands::{
    BotServices, Command, CommandHandler, CommandResult, IncomingMessage, PluginDescriptor,
    PluginRegistry,
};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

pub fn create_default_registry(config: &Config) -> PluginRegistry {
    use commands::{letter::LetterCommand, menu::MenuCommand, system::SystemCommand};

    let mut registry = PluginRegistry::new();

    registry.register(MenuCommand::from_config(config));
    registry.register(SystemCommand::new());
    registry.register(LetterCommand::new());

    log::debug!("{}", registry.debug_info());
    registry
}

// Convenience functions
pub fn create_handler(config: Config) -> CommandHandler {
    CommandHandler::new(config)
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}
