//! Plain-text rendering of snapshots and health reports.

use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use crate::format::{format_gb_with_mb, format_mb, pad_to_width};
use crate::health::{HealthReport, HealthStatus};
use crate::system::memory::SystemMemory;
use crate::system::metrics::SystemMetrics;
use crate::system::process::ProcessRecord;

const NAME_WIDTH: usize = 28;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Style { color: false }
    }

    pub fn colored() -> Self {
        Style { color: true }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn status_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::Warning => Color::Yellow,
        HealthStatus::Critical => Color::Red,
    }
}

pub fn render_memory(memory: &SystemMemory, style: &Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.bold("System Memory"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Total:      {}", format_gb_with_mb(memory.total_gb()));
    let _ = writeln!(out, "Used:       {}", format_gb_with_mb(memory.used_gb()));
    let _ = writeln!(out, "Available:  {}", format_gb_with_mb(memory.available_gb()));
    let _ = writeln!(out, "Free:       {}", format_gb_with_mb(memory.free_gb()));
    let _ = writeln!(out, "Usage:      {:.1}%", memory.percent);
    out
}

pub fn render_processes(processes: &[&ProcessRecord], style: &Style) -> String {
    let mut out = String::new();
    if processes.is_empty() {
        let _ = writeln!(out, "No matching processes.");
        return out;
    }

    let header = format!(
        "{:>7}  {}  {:>10}  {:>10}  {:>5}  OWNER",
        "PID",
        pad_to_width("NAME", NAME_WIDTH),
        "RSS",
        "VMS",
        "MEM%"
    );
    let _ = writeln!(out, "{}", style.bold(&header));

    for p in processes {
        let _ = writeln!(
            out,
            "{:>7}  {}  {:>10}  {:>10}  {:>5.1}  {}",
            p.pid,
            pad_to_width(&p.name, NAME_WIDTH),
            format_mb(p.memory.resident_bytes),
            format_mb(p.memory.virtual_bytes),
            p.memory.percent,
            p.owner.as_deref().unwrap_or("-")
        );
    }
    out
}

pub fn render_health(report: &HealthReport, metrics: &SystemMetrics, style: &Style) -> String {
    let mut out = String::new();
    let status = style.paint(&report.status.label().to_uppercase(), status_color(report.status));
    let _ = writeln!(
        out,
        "{} System health: {} ({:.1}/100)",
        report.status.indicator(),
        status,
        report.overall_score
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", style.bold("Scores"));
    let _ = writeln!(
        out,
        "  CPU:     {:>5.1}  ({:.1}% used)",
        report.scores.cpu, metrics.cpu_percent
    );
    let _ = writeln!(
        out,
        "  Memory:  {:>5.1}  ({:.1}% used, {:.2} / {:.2} GB)",
        report.scores.memory, metrics.memory_percent, metrics.memory_used_gb, metrics.memory_total_gb
    );
    let _ = writeln!(
        out,
        "  Disk:    {:>5.1}  ({:.1}% used, {:.2} / {:.2} GB)",
        report.scores.disk, metrics.disk_percent, metrics.disk_used_gb, metrics.disk_total_gb
    );
    let _ = writeln!(out);

    let limits = if report.is_healthy {
        style.paint("within limits", Color::Green)
    } else {
        style.paint("exceeded", Color::Red)
    };
    let _ = writeln!(out, "Thresholds: {limits}");
    let _ = writeln!(out);

    if report.warnings.is_empty() {
        let _ = writeln!(out, "No warnings.");
    } else {
        let _ = writeln!(out, "{}", style.bold("Warnings"));
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {}", style.paint(warning, Color::Yellow));
        }
    }
    out
}
