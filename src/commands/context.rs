// =====================================================
// FILE: commands/context.rs - COLLABORATORS SEEN BY COMMANDS
// =====================================================

use super::plugins::PluginDescriptor;
use super::system::SystemProbe;
use crate::core::helpers::jid_user;
use crate::core::prelude::*;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// One chat message as delivered by the transport.
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    pub sender: String,
    pub text: String,
    pub mentioned: Vec<String>,
    pub quoted_text: Option<String>,
}

impl IncomingMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn mentioning(mut self, user: impl Into<String>) -> Self {
        self.mentioned.push(user.into());
        self
    }

    pub fn quoting(mut self, text: impl Into<String>) -> Self {
        self.quoted_text = Some(text.into());
        self
    }
}

/// Everything a command sees for one invocation.
pub struct CommandContext<'a> {
    pub message: &'a IncomingMessage,
    pub keyword: &'a str,
    pub args: &'a [String],
    pub text: &'a str,
    /// Snapshot of every registered plugin, disabled ones included.
    pub plugins: &'a [PluginDescriptor],
    pub services: &'a BotServices,
    pub config: &'a Config,
}

impl CommandContext<'_> {
    /// First mentioned user, else the sender.
    pub fn target_user(&self) -> &str {
        self.message
            .mentioned
            .first()
            .map(String::as_str)
            .unwrap_or(&self.message.sender)
    }
}

pub trait UserDirectory: Send + Sync {
    fn display_name(&self, id: &str) -> String;
    fn limit(&self, id: &str) -> u64;
    /// Number of users known to the store.
    fn total_users(&self) -> usize;
    fn is_registered(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct UserRecord {
    pub name: Option<String>,
    pub limit: u64,
    pub registered: bool,
}

#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, id: impl Into<String>, record: UserRecord) {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.insert(id.into(), record);
    }

    fn with_user<T>(&self, id: &str, f: impl FnOnce(Option<&UserRecord>) -> T) -> T {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        f(users.get(id))
    }
}

impl UserDirectory for MemoryUserDirectory {
    fn display_name(&self, id: &str) -> String {
        self.with_user(id, |user| {
            user.and_then(|u| u.name.clone())
                .unwrap_or_else(|| jid_user(id).to_string())
        })
    }

    fn limit(&self, id: &str) -> u64 {
        self.with_user(id, |user| user.map_or(0, |u| u.limit))
    }

    fn total_users(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn is_registered(&self, id: &str) -> bool {
        self.with_user(id, |user| user.is_some_and(|u| u.registered))
    }
}

/// Who the bot is, and whether it runs on behalf of a parent bot.
#[derive(Debug, Clone, Default)]
pub struct BotIdentity {
    pub name: String,
    pub jid: Option<String>,
    pub parent_jid: Option<String>,
}

impl BotIdentity {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.bot_name.clone(),
            jid: config.identity.bot_jid.clone(),
            parent_jid: config.identity.parent_jid.clone(),
        }
    }

    pub fn is_official(&self) -> bool {
        self.parent_jid.is_none()
    }

    pub fn ownership_line(&self) -> String {
        match &self.parent_jid {
            None => format!(
                "*Official Bot:* wa.me/{}",
                self.jid.as_deref().map_or("bot", jid_user)
            ),
            Some(parent) => format!("*Sub Bot of:* wa.me/{}", jid_user(parent)),
        }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
    fn uptime(&self) -> Duration;
}

/// Wall clock at a fixed UTC offset, uptime counted from construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(utc_offset_hours: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_hours * 3600)
            .unwrap_or_else(|| Utc.fix());
        Self {
            started: Instant::now(),
            offset,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Frozen clock for reproducible output.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub now: DateTime<FixedOffset>,
    pub uptime: Duration,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn uptime(&self) -> Duration {
        self.uptime
    }
}

/// Host-provided collaborators shared by all commands.
#[derive(Clone)]
pub struct BotServices {
    pub users: Arc<dyn UserDirectory>,
    pub identity: BotIdentity,
    pub clock: Arc<dyn Clock>,
    pub system: Arc<dyn SystemProbe>,
}

impl BotServices {
    pub fn from_config(config: &Config) -> Self {
        Self {
            users: Arc::new(MemoryUserDirectory::new()),
            identity: BotIdentity::from_config(config),
            clock: Arc::new(SystemClock::new(config.utc_offset_hours)),
            system: Arc::new(super::system::HostProbe),
        }
    }
}
