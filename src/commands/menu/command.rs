use super::labels::CategoryLabelMap;
use super::layout::{ColumnLayout, MenuStyle};
use super::render::{MenuContext, MenuRenderer};
use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::plugins::PluginDescriptor;
use crate::core::helpers::clock_string;
use crate::core::prelude::*;

/// Lists every enabled plugin, grouped by category.
#[derive(Debug, Default)]
pub struct MenuCommand {
    renderer: MenuRenderer,
}

impl MenuCommand {
    pub fn new(renderer: MenuRenderer) -> Self {
        Self { renderer }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(MenuRenderer::new(
            CategoryLabelMap::from_config(config),
            ColumnLayout::new(config.menu.left_width),
            MenuStyle::default(),
        ))
    }

    fn menu_context(ctx: &CommandContext<'_>) -> MenuContext {
        let services = ctx.services;
        let user = ctx.target_user();
        let now = services.clock.now();

        MenuContext {
            bot_name: services.identity.name.clone(),
            user_name: services.users.display_name(user),
            limit: services.users.limit(user),
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            uptime: clock_string(services.clock.uptime()),
            total_users: services.users.total_users(),
            ownership: services.identity.ownership_line(),
            prefix: ctx.config.prefix.clone(),
        }
    }
}

#[async_trait::async_trait]
impl Command for MenuCommand {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(["menu", "help", "cmd", "commands"])
            .tags(["main"])
            .help(["menu", "help", "commands"])
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<String> {
        let menu_ctx = Self::menu_context(ctx);
        Ok(self.renderer.render(ctx.plugins, &menu_ctx).trim().to_string())
    }
}
