use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use sysinfo::{
    Disks, MINIMUM_CPU_UPDATE_INTERVAL, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate,
    System, UpdateKind, Users,
};

use super::memory::{ProcessMemory, SystemMemory, bytes_to_gb};
use super::metrics::SystemMetrics;
use super::process::ProcessRecord;

/// Supplier of raw snapshots. Every call is best-effort and never fails.
pub trait MetricsSource {
    fn snapshot_system_memory(&mut self) -> SystemMemory;

    /// Processes that disappear or cannot be read mid-enumeration are skipped.
    fn snapshot_all_processes(&mut self) -> Vec<ProcessRecord>;

    /// Blocks for the CPU sampling interval.
    fn snapshot_system_metrics(&mut self) -> SystemMetrics;
}

#[derive(Clone, Debug)]
pub struct CollectorConfig {
    pub cpu_sample_interval: Duration,
    pub disk_mount_point: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            cpu_sample_interval: Duration::from_secs(1),
            disk_mount_point: PathBuf::from("/"),
        }
    }
}

pub struct Collector {
    sys: System,
    config: CollectorConfig,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Collector {
            sys: System::new(),
            config,
        }
    }

    fn sample_cpu(&mut self) -> f64 {
        let _span = tracing::debug_span!("collector.sample_cpu").entered();

        let interval = self.config.cpu_sample_interval.max(MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_usage();
        thread::sleep(interval);
        self.sys.refresh_cpu_usage();
        f64::from(self.sys.global_cpu_usage())
    }

    fn build_system_memory(&self) -> SystemMemory {
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = self.sys.used_memory();
        SystemMemory {
            total_bytes: total,
            available_bytes: available,
            used_bytes: used,
            free_bytes: self.sys.free_memory(),
            percent: percent_of(total.saturating_sub(available), total),
        }
    }
}

impl MetricsSource for Collector {
    fn snapshot_system_memory(&mut self) -> SystemMemory {
        let _span = tracing::debug_span!("collector.system_memory").entered();

        self.sys.refresh_memory();
        self.build_system_memory()
    }

    fn snapshot_all_processes(&mut self) -> Vec<ProcessRecord> {
        let _span = tracing::debug_span!("collector.processes").entered();

        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_memory()
                .with_user(UpdateKind::OnlyIfNotSet),
        );
        let users = Users::new_with_refreshed_list();
        let total_memory = self.sys.total_memory();

        let mut records = Vec::with_capacity(self.sys.processes().len());
        let mut skipped = 0usize;

        for (pid, process) in self.sys.processes() {
            let pid = pid.as_u32();
            if pid == 0 || process.status() == ProcessStatus::Zombie {
                tracing::trace!(pid, "skipping inaccessible process");
                skipped += 1;
                continue;
            }

            let resident = process.memory();
            let memory = ProcessMemory {
                resident_bytes: resident,
                virtual_bytes: process.virtual_memory(),
                percent: percent_of(resident, total_memory),
            };
            let owner = process
                .user_id()
                .and_then(|uid| users.get_user_by_id(uid))
                .map(|user| user.name().to_string());

            let name = process.name().to_string_lossy().to_string();
            records.push(ProcessRecord::new(pid, name, memory).with_owner(owner));
        }

        tracing::debug!(collected = records.len(), skipped, "process snapshot built");
        records
    }

    fn snapshot_system_metrics(&mut self) -> SystemMetrics {
        let _span = tracing::debug_span!("collector.system_metrics").entered();

        let cpu_percent = self.sample_cpu();
        self.sys.refresh_memory();
        let memory = self.build_system_memory();

        let disks = Disks::new_with_refreshed_list();
        let (disk_total, disk_available) = disk_space(
            disks
                .list()
                .iter()
                .map(|d| (d.mount_point(), d.total_space(), d.available_space())),
            &self.config.disk_mount_point,
        );
        let disk_used = disk_total.saturating_sub(disk_available);

        SystemMetrics {
            cpu_percent,
            memory_percent: memory.percent,
            disk_percent: percent_of(disk_used, disk_total),
            memory_total_gb: memory.total_gb(),
            memory_used_gb: memory.used_gb(),
            disk_total_gb: bytes_to_gb(disk_total),
            disk_used_gb: bytes_to_gb(disk_used),
        }
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Returns (total, available) bytes for the disk mounted at `mount_point`,
/// or the sum over all disks when nothing is mounted there.
fn disk_space<'a, I>(disks: I, mount_point: &Path) -> (u64, u64)
where
    I: IntoIterator<Item = (&'a Path, u64, u64)>,
{
    let mut sum = (0u64, 0u64);
    for (mount, total, available) in disks {
        if mount == mount_point {
            return (total, available);
        }
        sum.0 = sum.0.saturating_add(total);
        sum.1 = sum.1.saturating_add(available);
    }
    tracing::debug!(
        mount_point = %mount_point.display(),
        "mount point not found, using totals across all disks"
    );
    sum
}
