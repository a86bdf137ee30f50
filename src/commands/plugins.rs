// =====================================================
// FILE: commands/plugins.rs - PLUGIN DESCRIPTORS
// =====================================================

use crate::core::constants::OTHERS_TAG;
use crate::core::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// Metadata of one registered plugin, normalized into strict types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct PluginDescriptor {
    pub command_names: Vec<String>,
    pub tags: Vec<String>,
    pub help: Vec<String>,
    pub disabled: bool,
    /// Only registered users may invoke the plugin.
    pub register: bool,
}

impl PluginDescriptor {
    pub fn new<I, S>(command_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command_names: command_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn help<I, S>(mut self, help: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.help = help.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn register(mut self, register: bool) -> Self {
        self.register = register;
        self
    }

    /// First tag, or `__others__` when there is none.
    pub fn primary_tag(&self) -> &str {
        match self.tags.first() {
            Some(tag) if !tag.is_empty() => tag,
            _ => OTHERS_TAG,
        }
    }

    pub fn answers_to(&self, keyword: &str) -> bool {
        self.command_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// Lenient conversion from loosely typed plugin metadata.
    ///
    /// `command` and `help` may be a single value or an array; non-string
    /// entries are dropped. `tags` must be an array, anything else means "no
    /// tags". `disabled` and `register` accept any truthy value.
    pub fn from_value(value: &Value) -> Self {
        Self {
            command_names: string_list(value.get("command"), true),
            tags: string_list(value.get("tags"), false),
            help: string_list(value.get("help"), true),
            disabled: value.get("disabled").is_some_and(is_truthy),
            register: value.get("register").is_some_and(is_truthy),
        }
    }

    /// Parses a JSON array of plugin metadata objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        Ok(values.iter().map(Self::from_value).collect())
    }
}

impl From<Value> for PluginDescriptor {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn string_list(value: Option<&Value>, accept_scalar: bool) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(single)) if accept_scalar => vec![single.clone()],
        _ => Vec::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_command_becomes_sequence() {
        let d = PluginDescriptor::from_value(&json!({ "command": "ping", "tags": ["tools"] }));
        assert_eq!(d.command_names, vec!["ping"]);
        assert_eq!(d.primary_tag(), "tools");
    }

    #[test]
    fn test_non_string_commands_are_dropped() {
        let d = PluginDescriptor::from_value(&json!({
            "command": ["a", 5, null, { "regex": "^x" }, "b"],
        }));
        assert_eq!(d.command_names, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_or_odd_fields() {
        let d = PluginDescriptor::from_value(&json!({ "command": 42, "tags": "main" }));
        assert!(d.command_names.is_empty());
        assert!(d.tags.is_empty());
        assert_eq!(d.primary_tag(), OTHERS_TAG);
        assert!(!d.disabled);

        let d = PluginDescriptor::from_value(&json!("not an object"));
        assert_eq!(d, PluginDescriptor::default());
    }

    #[test]
    fn test_empty_first_tag_is_others() {
        let d = PluginDescriptor::new(["x"]).tags(["", "fun"]);
        assert_eq!(d.primary_tag(), OTHERS_TAG);
    }

    #[test]
    fn test_truthy_flags() {
        let d = PluginDescriptor::from_value(&json!({ "command": "x", "disabled": 1, "register": "yes" }));
        assert!(d.disabled);
        assert!(d.register);

        let d = PluginDescriptor::from_value(&json!({ "command": "x", "disabled": 0, "register": "" }));
        assert!(!d.disabled);
        assert!(!d.register);
    }

    #[test]
    fn test_list_from_json() {
        let list = PluginDescriptor::list_from_json(
            r#"[{"command":["menu"],"tags":["main"]},{"command":"s","disabled":true}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list[1].disabled);

        assert!(PluginDescriptor::list_from_json("{").is_err());
    }

    #[test]
    fn test_deserialize_through_serde() {
        let d: PluginDescriptor =
            serde_json::from_str(r#"{"command":"letter","help":"letter <text>"}"#).unwrap();
        assert_eq!(d.command_names, vec!["letter"]);
        assert_eq!(d.help, vec!["letter <text>"]);
    }

    #[test]
    fn test_answers_to_ignores_case() {
        let d = PluginDescriptor::new(["Sticker", "s"]);
        assert!(d.answers_to("sticker"));
        assert!(d.answers_to("S"));
        assert!(!d.answers_to("st"));
    }
}
