pub const APP_TITLE: &str = "CHATCMD PLUGINS";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BOT_NAME: &str = "LazackDevice";
pub const DEFAULT_PREFIX: &str = ".";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

/// Primary tag assigned to plugins without any tag.
pub const OTHERS_TAG: &str = "__others__";
pub const FALLBACK_LABEL: &str = "Other Commands";

pub const DEFAULT_LEFT_WIDTH: usize = 15;
pub const MIN_LEFT_WIDTH: usize = 1;
pub const MAX_LEFT_WIDTH: usize = 64;

pub const CONFIG_ENV: &str = "CHATCMD_CONFIG";
pub const CONFIG_FILE: &str = "chatcmd.toml";
