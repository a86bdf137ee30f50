use super::probe::SystemProbe;
use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::plugins::PluginDescriptor;
use crate::core::helpers::clock_string_long;
use crate::core::prelude::*;

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Base-1024 size with at most `decimals` digits, trailing zeros dropped.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < BYTE_UNITS.len() - 1 && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }
    let value = bytes as f64 / 1024u64.pow(exponent as u32) as f64;

    let fixed = format!("{:.*}", decimals, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{} {}", trimmed, BYTE_UNITS[exponent])
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Default)]
pub struct SystemCommand;

impl SystemCommand {
    pub fn new() -> Self {
        Self
    }

    /// Status report from `probe`; sections without data are left out.
    pub fn report(probe: &dyn SystemProbe, uptime: Duration) -> String {
        let mut out = String::from("*SYSTEM STATUS*\n\n");
        out.push_str(&format!("*Host:* {}\n", probe.hostname()));
        out.push_str(&format!(
            "*Platform:* {} ({})\n",
            probe.platform(),
            probe.arch()
        ));

        if let Some(cpu) = probe.cpu() {
            out.push_str(&format!(
                "*CPU:* {} ({} cores @ {:.2}GHz)\n",
                cpu.model,
                cpu.cores,
                cpu.speed_mhz / 1000.0
            ));
        }

        let load = probe.load_average().map_or_else(
            || "n/a".to_string(),
            |avg| {
                avg.iter()
                    .map(|v| format!("{:.2}", v))
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        );
        out.push_str(&format!("*Load Average:* {}\n\n", load));

        if let Some(mem) = probe.memory() {
            out.push_str("*Memory Usage:*\n");
            out.push_str(&format!("▸ Total: {}\n", format_bytes(mem.total, 2)));
            out.push_str(&format!(
                "▸ Used: {} ({:.2}%)\n",
                format_bytes(mem.used(), 2),
                percent(mem.used(), mem.total)
            ));
            out.push_str(&format!("▸ Free: {}\n", format_bytes(mem.free, 2)));
        }
        out.push_str(&format!("*Uptime:* {}\n\n", clock_string_long(uptime)));

        if let Some(process) = probe.process_memory() {
            out.push_str("*Process Memory:*\n");
            out.push_str(&format!("▸ Resident: {}\n", format_bytes(process.resident, 2)));
            out.push_str(&format!(
                "▸ Virtual: {}\n\n",
                format_bytes(process.virtual_size, 2)
            ));
        }

        match probe.disk() {
            Some(disk) => {
                out.push_str("*Disk Space:*\n");
                out.push_str(&format!("▸ Total: {}\n", disk.size));
                out.push_str(&format!("▸ Used: {} ({})\n", disk.used, disk.use_percent));
                out.push_str(&format!("▸ Available: {}\n", disk.available));
            }
            None => out.push_str("Could not retrieve disk information\n"),
        }

        out.trim().to_string()
    }
}

#[async_trait::async_trait]
impl Command for SystemCommand {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(["system", "sysinfo"])
            .tags(["info", "tools"])
            .help(["system", "status"])
            .register(true)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<String> {
        let probe = Arc::clone(&ctx.services.system);
        let uptime = ctx.services.clock.uptime();

        // `df` and /proc reads block
        tokio::task::spawn_blocking(move || Self::report(probe.as_ref(), uptime))
            .await
            .map_err(|e| AppError::Plugin(format!("system report failed: {}", e)))
    }
}
