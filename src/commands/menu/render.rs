use super::aggregate::group_commands;
use super::labels::CategoryLabelMap;
use super::layout::{ColumnLayout, MenuStyle};
use crate::commands::plugins::PluginDescriptor;

/// Header and footer values, rendered as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuContext {
    pub bot_name: String,
    pub user_name: String,
    pub limit: u64,
    pub date: String,
    pub time: String,
    pub uptime: String,
    pub total_users: usize,
    pub ownership: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Default)]
pub struct MenuRenderer {
    pub labels: CategoryLabelMap,
    pub layout: ColumnLayout,
    pub style: MenuStyle,
}

impl MenuRenderer {
    pub fn new(labels: CategoryLabelMap, layout: ColumnLayout, style: MenuStyle) -> Self {
        Self {
            labels,
            layout,
            style,
        }
    }

    /// Header, one section per primary tag in key order, footer.
    pub fn render(&self, plugins: &[PluginDescriptor], ctx: &MenuContext) -> String {
        let grouped = group_commands(plugins);

        let mut text = self.header(ctx);
        for (tag, commands) in &grouped {
            text.push('\n');
            text.push_str(&self.section(self.labels.resolve(tag), commands));
        }
        text.push_str(&self.footer(ctx));

        log::debug!(
            "Menu built: {} plugins, {} sections, {} commands",
            plugins.len(),
            grouped.len(),
            grouped.values().map(Vec::len).sum::<usize>()
        );
        text
    }

    pub fn header(&self, ctx: &MenuContext) -> String {
        let s = &self.style;
        let field = |name: &str, value: &dyn std::fmt::Display| {
            s.line(&format!("{} {}", s.emphasize(&format!("{}:", name)), value))
        };

        [
            s.header_title(&ctx.bot_name.to_uppercase()),
            s.line(""),
            field("User", &ctx.user_name),
            field("Limit", &ctx.limit),
            s.line(""),
            field("Date", &ctx.date),
            field("Time", &ctx.time),
            field("Uptime", &ctx.uptime),
            field("Users", &ctx.total_users),
            s.line(""),
            s.line(&ctx.ownership),
            s.line(""),
            s.header_close.to_string(),
        ]
        .join("\n")
    }

    /// Framed block; an empty command list yields only the frame.
    pub fn section(&self, label: &str, commands: &[String]) -> String {
        let mut block = self.style.section_title(label);
        block.push('\n');
        for row in self.layout.rows(commands) {
            block.push_str(&self.style.line(&row));
            block.push('\n');
        }
        block.push_str(self.style.section_close);
        block
    }

    pub fn footer(&self, ctx: &MenuContext) -> String {
        let s = &self.style;
        format!(
            "\n\n{}\n{} {}sticker (to create stickers)\n\n{}",
            s.emphasize(&format!("Type {}cmdname to use a command", ctx.prefix)),
            s.emphasize("Example:"),
            ctx.prefix,
            s.emphasize(&format!("Thank you for using {}!", ctx.bot_name)),
        )
    }
}

/// Renders the menu with the default layout and glyphs.
pub fn build_menu(
    plugins: &[PluginDescriptor],
    labels: &CategoryLabelMap,
    ctx: &MenuContext,
) -> String {
    MenuRenderer {
        labels: labels.clone(),
        ..MenuRenderer::default()
    }
    .render(plugins, ctx)
}
