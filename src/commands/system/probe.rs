// =====================================================
// FILE: commands/system/probe.rs - HOST INTROSPECTION
// =====================================================

use std::process::Command as Process;

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub cores: usize,
    pub speed_mhz: f64,
}

/// Bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total: u64,
    pub free: u64,
}

impl MemoryUsage {
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }
}

/// Bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMemory {
    pub resident: u64,
    pub virtual_size: u64,
}

/// Human-readable values as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsage {
    pub size: String,
    pub used: String,
    pub available: String,
    pub use_percent: String,
}

/// Source of the host figures shown by the `system` command.
pub trait SystemProbe: Send + Sync {
    fn hostname(&self) -> String;
    fn platform(&self) -> String {
        std::env::consts::OS.to_string()
    }
    fn arch(&self) -> String {
        std::env::consts::ARCH.to_string()
    }
    fn cpu(&self) -> Option<CpuInfo>;
    fn load_average(&self) -> Option<[f64; 3]>;
    fn memory(&self) -> Option<MemoryUsage>;
    fn process_memory(&self) -> Option<ProcessMemory>;
    fn disk(&self) -> Option<DiskUsage>;
}

/// Reads `/proc` and `df` on Linux; most figures are `None` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl HostProbe {
    fn read(path: &str) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::debug!("Cannot read {}: {}", path, e);
                None
            }
        }
    }

    /// `Key:   1234 kB` lines, value in bytes.
    fn kib_field(content: &str, key: &str) -> Option<u64> {
        content
            .lines()
            .find_map(|line| line.strip_prefix(key)?.strip_prefix(':'))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|value| value.parse::<u64>().ok())
            .map(|kib| kib * 1024)
    }
}

impl SystemProbe for HostProbe {
    fn hostname(&self) -> String {
        Self::read("/etc/hostname")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn cpu(&self) -> Option<CpuInfo> {
        parse_cpuinfo(&Self::read("/proc/cpuinfo")?)
    }

    fn load_average(&self) -> Option<[f64; 3]> {
        parse_loadavg(&Self::read("/proc/loadavg")?)
    }

    fn memory(&self) -> Option<MemoryUsage> {
        let content = Self::read("/proc/meminfo")?;
        let total = Self::kib_field(&content, "MemTotal")?;
        let free = Self::kib_field(&content, "MemAvailable")
            .or_else(|| Self::kib_field(&content, "MemFree"))?;
        Some(MemoryUsage { total, free })
    }

    fn process_memory(&self) -> Option<ProcessMemory> {
        let content = Self::read("/proc/self/status")?;
        Some(ProcessMemory {
            resident: Self::kib_field(&content, "VmRSS")?,
            virtual_size: Self::kib_field(&content, "VmSize")?,
        })
    }

    fn disk(&self) -> Option<DiskUsage> {
        let output = match Process::new("df").arg("-h").output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("Error getting disk space: {}", e);
                return None;
            }
        };
        parse_df(&String::from_utf8_lossy(&output.stdout))
    }
}

/// First CPU block: model (clock suffix after `@` removed), core count, MHz.
pub fn parse_cpuinfo(content: &str) -> Option<CpuInfo> {
    let field = |key: &str| {
        content.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            (name.trim() == key).then(|| value.trim().to_string())
        })
    };

    let model = field("model name")?;
    let cores = content
        .lines()
        .filter(|line| line.split(':').next().is_some_and(|k| k.trim() == "processor"))
        .count();
    let speed_mhz = field("cpu MHz")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    Some(CpuInfo {
        model: model.split('@').next().unwrap_or(&model).trim().to_string(),
        cores: cores.max(1),
        speed_mhz,
    })
}

pub fn parse_loadavg(content: &str) -> Option<[f64; 3]> {
    let mut values = content.split_whitespace().map(|v| v.parse::<f64>().ok());
    Some([values.next()??, values.next()??, values.next()??])
}

/// First `/dev/` line of `df -h`.
pub fn parse_df(output: &str) -> Option<DiskUsage> {
    let line = output.lines().find(|line| line.contains("/dev/"))?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return None;
    }
    Some(DiskUsage {
        size: parts[1].to_string(),
        used: parts[2].to_string(),
        available: parts[3].to_string(),
        use_percent: parts[4].to_string(),
    })
}
