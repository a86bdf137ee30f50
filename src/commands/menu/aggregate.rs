use crate::commands::plugins::PluginDescriptor;
use std::collections::{BTreeMap, HashSet};

/// Primary tag to command names. Keys iterate in lexicographic order;
/// names keep plugin iteration order.
pub type GroupedCommands = BTreeMap<String, Vec<String>>;

/// Groups the command names of enabled plugins by primary tag.
///
/// A keyword claimed by an earlier enabled plugin is skipped so that every
/// name is listed once. Names compare case-insensitively, as dispatch does.
pub fn group_commands(plugins: &[PluginDescriptor]) -> GroupedCommands {
    let mut grouped = GroupedCommands::new();
    let mut seen = HashSet::new();

    for plugin in plugins.iter().filter(|p| !p.disabled) {
        let group = grouped.entry(plugin.primary_tag().to_string()).or_default();
        for name in &plugin.command_names {
            if seen.insert(name.to_lowercase()) {
                group.push(name.clone());
            } else {
                log::debug!("Command '{}' already listed, skipping duplicate", name);
            }
        }
    }

    grouped
}
