use super::context::CommandContext;
use super::plugins::PluginDescriptor;
use crate::core::prelude::*;

#[async_trait::async_trait]
pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    /// Metadata read once when the plugin is registered.
    fn descriptor(&self) -> PluginDescriptor;

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<String>;
}
