// =====================================================
// FILE: commands/mod.rs
// =====================================================

pub mod command;
pub mod context;
pub mod handler;
pub mod letter;
pub mod menu;
pub mod parsing;
pub mod plugins;
pub mod registry;
pub mod system;

pub use command::Command;
pub use context::{BotServices, CommandContext, IncomingMessage};
pub use handler::{CommandHandler, CommandResult};
pub use plugins::PluginDescriptor;
pub use registry::PluginRegistry;
