//! Health scoring.
//!
//! Each utilization percentage maps through a piecewise-linear, non-increasing
//! curve onto a 0-100 component score. The overall score is
//! a fixed weighted sum of the components, rounded to one decimal place
//! (half away from zero).

use serde::Serialize;

use crate::system::metrics::SystemMetrics;

pub const CPU_WEIGHT: f64 = 0.4;
pub const MEMORY_WEIGHT: f64 = 0.4;
pub const DISK_WEIGHT: f64 = 0.2;

pub const HEALTHY_MIN_SCORE: f64 = 80.0;
pub const WARNING_MIN_SCORE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= HEALTHY_MIN_SCORE {
            HealthStatus::Healthy
        } else if score >= WARNING_MIN_SCORE {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "\u{1F7E2}",
            HealthStatus::Warning => "\u{1F7E1}",
            HealthStatus::Critical => "\u{1F534}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

impl ComponentScores {
    pub fn weighted(&self) -> f64 {
        self.cpu * CPU_WEIGHT + self.memory * MEMORY_WEIGHT + self.disk * DISK_WEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub overall_score: f64,
    pub status: HealthStatus,
    pub scores: ComponentScores,
    pub warnings: Vec<String>,
    /// Copied from the metrics; may disagree with `status`.
    pub is_healthy: bool,
}

pub fn score_health(metrics: &SystemMetrics) -> HealthReport {
    let scores = ComponentScores {
        cpu: cpu_score(metrics.cpu_percent),
        memory: memory_score(metrics.memory_percent),
        disk: disk_score(metrics.disk_percent),
    };
    let overall_score = round_tenth(scores.weighted());

    HealthReport {
        overall_score,
        status: HealthStatus::from_score(overall_score),
        scores,
        warnings: collect_warnings(metrics),
        is_healthy: metrics.is_healthy(),
    }
}

pub fn cpu_score(cpu: f64) -> f64 {
    let score = if cpu < 50.0 {
        100.0
    } else if cpu < 70.0 {
        100.0 - (cpu - 50.0) * 1.5
    } else if cpu < 85.0 {
        70.0 - (cpu - 70.0) * 2.0
    } else {
        40.0 - (cpu - 85.0) * 2.5
    };
    clamp_score(score)
}

// The 1.33 slope leaves a 0.05 drop at 75 (80.05 just below, 80 at 75).
pub fn memory_score(memory: f64) -> f64 {
    let score = if memory < 60.0 {
        100.0
    } else if memory < 75.0 {
        100.0 - (memory - 60.0) * 1.33
    } else if memory < 85.0 {
        80.0 - (memory - 75.0) * 2.0
    } else {
        60.0 - (memory - 85.0) * 3.0
    };
    clamp_score(score)
}

pub fn disk_score(disk: f64) -> f64 {
    let score = if disk < 70.0 {
        100.0
    } else if disk < 80.0 {
        100.0 - (disk - 70.0) * 2.0
    } else if disk < 90.0 {
        80.0 - (disk - 80.0) * 3.0
    } else {
        50.0 - (disk - 90.0) * 5.0
    };
    clamp_score(score)
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn collect_warnings(metrics: &SystemMetrics) -> Vec<String> {
    let mut warnings = Vec::new();

    let cpu = metrics.cpu_percent;
    if cpu > 80.0 {
        warnings.push(format!("High CPU usage: {cpu:.1}%"));
    } else if cpu > 60.0 {
        warnings.push(format!("CPU usage elevated: {cpu:.1}%"));
    }

    let memory = metrics.memory_percent;
    if memory > 85.0 {
        warnings.push(format!("High memory usage: {memory:.1}%"));
    } else if memory > 70.0 {
        warnings.push(format!("Memory usage elevated: {memory:.1}%"));
    }

    let disk = metrics.disk_percent;
    if disk > 90.0 {
        warnings.push(format!("Disk space critical: {disk:.1}% used"));
    } else if disk > 80.0 {
        warnings.push(format!("Disk space low: {disk:.1}% used"));
    }

    warnings
}
