pub mod command;
pub mod probe;

pub use command::{format_bytes, SystemCommand};
pub use probe::{CpuInfo, DiskUsage, HostProbe, MemoryUsage, ProcessMemory, SystemProbe};
