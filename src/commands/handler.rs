// =====================================================
// FILE: src/commands/handler.rs - MESSAGE DISPATCH
// =====================================================

use super::command::Command;
use super::context::{BotServices, CommandContext, IncomingMessage};
use super::parsing::parse_command;
use super::plugins::PluginDescriptor;
use super::registry::PluginRegistry;
use crate::core::prelude::*;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
}

impl CommandResult {
    fn ok(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

pub struct CommandHandler {
    registry: RwLock<PluginRegistry>,
    services: BotServices,
    config: Config,
}

impl CommandHandler {
    /// Default plugin set and in-memory collaborators.
    pub fn new(config: Config) -> Self {
        let services = BotServices::from_config(&config);
        let registry = crate::create_default_registry(&config);
        Self::with_registry(config, services, registry)
    }

    pub fn with_registry(config: Config, services: BotServices, registry: PluginRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            services,
            config,
        }
    }

    pub fn services(&self) -> &BotServices {
        &self.services
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lines without the command prefix yield an empty, unsuccessful result.
    pub async fn handle_message(&self, message: &IncomingMessage) -> CommandResult {
        let Some(parsed) = parse_command(&self.config.prefix, &message.text) else {
            return CommandResult::failed(String::new());
        };

        log::info!("Handling '{}' from {}", parsed.keyword, message.sender);

        // Lock released before the plugin runs.
        let (plugin, descriptor, snapshot) = {
            let registry = self.read_registry();
            match registry.find(&parsed.keyword) {
                Some(found) => (
                    Arc::clone(&found.command),
                    found.descriptor.clone(),
                    registry.snapshot(),
                ),
                None => {
                    log::warn!("Unknown command: {}", parsed.keyword);
                    return CommandResult::failed(format!(
                        "Unknown command: {}{}",
                        self.config.prefix, parsed.keyword
                    ));
                }
            }
        };

        if descriptor.register && !self.services.users.is_registered(&message.sender) {
            log::debug!("Rejected '{}' for unregistered {}", parsed.keyword, message.sender);
            return CommandResult::failed(format!(
                "You must be registered to use {}{}.",
                self.config.prefix, parsed.keyword
            ));
        }

        let ctx = CommandContext {
            message,
            keyword: &parsed.keyword,
            args: &parsed.args,
            text: &parsed.text,
            plugins: &snapshot,
            services: &self.services,
            config: &self.config,
        };

        match plugin.execute(&ctx).await {
            Ok(msg) => {
                log::debug!(
                    "Command '{}' returned {} chars",
                    parsed.keyword,
                    msg.chars().count()
                );
                CommandResult::ok(msg)
            }
            Err(e) => {
                log::error!("Command '{}' failed: {}", parsed.keyword, e);
                CommandResult::failed(e.to_string())
            }
        }
    }

    pub fn add_command<T: Command>(&self, command: T) {
        self.write_registry().register(command);
    }

    pub fn remove_command(&self, keyword: &str) -> Option<PluginDescriptor> {
        self.write_registry().deregister(keyword)
    }

    pub fn set_disabled(&self, keyword: &str, disabled: bool) -> bool {
        self.write_registry().set_disabled(keyword, disabled)
    }

    pub fn plugins(&self) -> Vec<PluginDescriptor> {
        self.read_registry().snapshot()
    }

    pub fn debug_info(&self) -> String {
        self.read_registry().debug_info()
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, PluginRegistry> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, PluginRegistry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}
