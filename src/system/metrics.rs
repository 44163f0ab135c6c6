use serde::Serialize;

pub const CPU_HEALTHY_BELOW: f64 = 80.0;
pub const MEMORY_HEALTHY_BELOW: f64 = 85.0;
pub const DISK_HEALTHY_BELOW: f64 = 90.0;

/// Utilization snapshot used for health scoring. Totals are in GB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SystemMetrics {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub memory_total_gb: f64,
    pub memory_used_gb: f64,
    pub disk_total_gb: f64,
    pub disk_used_gb: f64,
}

impl SystemMetrics {
    /// Strict per-metric thresholds, independent of the weighted health score.
    pub fn is_healthy(&self) -> bool {
        self.cpu_percent < CPU_HEALTHY_BELOW
            && self.memory_percent < MEMORY_HEALTHY_BELOW
            && self.disk_percent < DISK_HEALTHY_BELOW
    }

    pub fn memory_available_gb(&self) -> f64 {
        (self.memory_total_gb - self.memory_used_gb).max(0.0)
    }

    pub fn disk_free_gb(&self) -> f64 {
        (self.disk_total_gb - self.disk_used_gb).max(0.0)
    }
}
