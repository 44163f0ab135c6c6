use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

pub fn gb_to_mb(gb: f64) -> f64 {
    gb * 1024.0
}

/// System-wide memory snapshot. All sizes are in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SystemMemory {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub percent: f64,
}

impl SystemMemory {
    pub fn total_gb(&self) -> f64 {
        bytes_to_gb(self.total_bytes)
    }

    pub fn available_gb(&self) -> f64 {
        bytes_to_gb(self.available_bytes)
    }

    pub fn used_gb(&self) -> f64 {
        bytes_to_gb(self.used_bytes)
    }

    pub fn free_gb(&self) -> f64 {
        bytes_to_gb(self.free_bytes)
    }

    pub fn total_mb(&self) -> f64 {
        gb_to_mb(self.total_gb())
    }

    pub fn available_mb(&self) -> f64 {
        gb_to_mb(self.available_gb())
    }

    pub fn used_mb(&self) -> f64 {
        gb_to_mb(self.used_gb())
    }

    pub fn free_mb(&self) -> f64 {
        gb_to_mb(self.free_gb())
    }
}

/// Memory held by a single process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ProcessMemory {
    /// Resident set size.
    pub resident_bytes: u64,
    /// Virtual memory size.
    pub virtual_bytes: u64,
    /// Resident share of total system memory.
    pub percent: f64,
}

impl ProcessMemory {
    pub fn resident_mb(&self) -> f64 {
        bytes_to_mb(self.resident_bytes)
    }

    pub fn virtual_mb(&self) -> f64 {
        bytes_to_mb(self.virtual_bytes)
    }
}
