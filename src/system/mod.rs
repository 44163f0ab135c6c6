pub mod collector;
pub mod memory;
pub mod metrics;
pub mod process;

pub use collector::{Collector, CollectorConfig, MetricsSource};
pub use memory::{ProcessMemory, SystemMemory};
pub use metrics::SystemMetrics;
pub use process::ProcessRecord;
