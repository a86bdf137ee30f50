use super::command::Command;
use super::plugins::PluginDescriptor;
use crate::core::prelude::*;
use std::collections::HashMap;

/// A registered plugin and the descriptor captured at registration.
#[derive(Debug, Clone)]
pub struct RegisteredPlugin {
    pub command: Arc<dyn Command>,
    pub descriptor: PluginDescriptor,
}

/// Host-owned plugin collection. Keyword lookup favours the enabled plugin
/// registered first.
pub struct PluginRegistry {
    plugins: Vec<RegisteredPlugin>,
    /// Lowercased keyword to owner indices, ascending.
    name_map: HashMap<String, Vec<usize>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        self.register_arc(Arc::new(command))
    }

    pub fn register_arc(&mut self, command: Arc<dyn Command>) -> &mut Self {
        let descriptor = command.descriptor();
        if descriptor.command_names.is_empty() {
            log::warn!("Plugin {:?} has no command names, it can never be invoked", command);
        }
        log::debug!(
            "Registering plugin: {:?} [{}]",
            descriptor.command_names,
            descriptor.primary_tag()
        );

        let index = self.plugins.len();
        for name in &descriptor.command_names {
            Self::index_name(&mut self.name_map, name, index);
        }
        self.plugins.push(RegisteredPlugin {
            command,
            descriptor,
        });
        self
    }

    /// Removes the plugin `keyword` dispatches to, or its first owner when
    /// every owner is disabled.
    pub fn deregister(&mut self, keyword: &str) -> Option<PluginDescriptor> {
        let index = self
            .owner_where(keyword, |p| !p.descriptor.disabled)
            .or_else(|| self.owner_where(keyword, |_| true))?;
        let removed = self.plugins.remove(index);
        self.reindex();
        log::debug!("Deregistered plugin: {:?}", removed.descriptor.command_names);
        Some(removed.descriptor)
    }

    /// Disabling targets the plugin `keyword` currently dispatches to;
    /// enabling targets the first disabled owner. Returns false when no
    /// such plugin exists.
    pub fn set_disabled(&mut self, keyword: &str, disabled: bool) -> bool {
        match self.owner_where(keyword, |p| p.descriptor.disabled != disabled) {
            Some(index) => {
                self.plugins[index].descriptor.disabled = disabled;
                log::debug!("Plugin '{}' disabled={}", keyword, disabled);
                true
            }
            None => false,
        }
    }

    /// First registered enabled plugin answering to `keyword`.
    pub fn find(&self, keyword: &str) -> Option<&RegisteredPlugin> {
        let index = self.owner_where(keyword, |p| !p.descriptor.disabled)?;
        self.plugins.get(index)
    }

    /// Copy of every descriptor in registration order, disabled ones included.
    pub fn snapshot(&self) -> Vec<PluginDescriptor> {
        self.plugins
            .iter()
            .map(|plugin| plugin.descriptor.clone())
            .collect()
    }

    pub fn debug_info(&self) -> String {
        let disabled = self
            .plugins
            .iter()
            .filter(|p| p.descriptor.disabled)
            .count();
        format!(
            "PluginRegistry: {} plugins, {} keywords, {} disabled",
            self.plugins.len(),
            self.name_map.len(),
            disabled
        )
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    fn owner_where<F>(&self, keyword: &str, pred: F) -> Option<usize>
    where
        F: Fn(&RegisteredPlugin) -> bool,
    {
        self.name_map
            .get(&keyword.trim().to_lowercase())?
            .iter()
            .copied()
            .find(|&index| self.plugins.get(index).is_some_and(&pred))
    }

    fn index_name(name_map: &mut HashMap<String, Vec<usize>>, name: &str, index: usize) {
        let owners = name_map.entry(name.to_lowercase()).or_default();
        // A plugin listing the same name twice owns it once
        if owners.last() != Some(&index) {
            owners.push(index);
        }
    }

    fn reindex(&mut self) {
        self.name_map.clear();
        for (index, plugin) in self.plugins.iter().enumerate() {
            for name in &plugin.descriptor.command_names {
                Self::index_name(&mut self.name_map, name, index);
            }
        }
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
