use crate::core::prelude::*;

/// Compact uptime used in the menu header: `1h 2m 3s`, zero parts omitted.
pub fn clock_string(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;

    let parts: Vec<String> = [(h, "h"), (m, "m"), (s, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Long uptime used by the system report: `[Nd ]Hh Mm Ss`.
pub fn clock_string_long(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let days = secs / 86_400;
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    let day_part = if days > 0 {
        format!("{}d ", days)
    } else {
        String::new()
    };
    format!("{}{}h {}m {}s", day_part, hours, minutes, seconds)
}

/// User part of a chat id (`255700@s.whatsapp.net` -> `255700`).
pub fn jid_user(jid: &str) -> &str {
    jid.split('@').next().unwrap_or(jid)
}
