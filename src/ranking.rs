//! Process ranking: filter, stable sort, then truncate.
//!
//! Everything here borrows the input snapshot and returns a new ordered
//! sequence of references; records are never mutated or reordered in place.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Serialize;

use crate::system::process::ProcessRecord;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    #[value(alias = "mem")]
    Memory,
    Name,
    Pid,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Memory => "Memory",
            SortKey::Name => "Name",
            SortKey::Pid => "PID",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "name" => SortKey::Name,
            "pid" => SortKey::Pid,
            _ => SortKey::Memory,
        }
    }

    fn compare(self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        match self {
            SortKey::Memory => a.memory.resident_bytes.cmp(&b.memory.resident_bytes),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Pid => a.pid.cmp(&b.pid),
        }
    }
}

/// Sort and limit settings carried from config and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub sort: SortKey,
    pub descending: bool,
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            sort: SortKey::Memory,
            descending: true,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RankOptions {
    pub fn rank<'a>(&self, records: &'a [ProcessRecord], filter: &str) -> Vec<&'a ProcessRecord> {
        rank_processes(records, filter, self.sort, self.descending, self.limit)
    }
}

pub fn filter_processes<'a>(records: &'a [ProcessRecord], filter: &str) -> Vec<&'a ProcessRecord> {
    records.iter().filter(|p| p.matches_filter(filter)).collect()
}

/// Ties keep their input order in both directions.
pub fn rank_processes<'a>(
    records: &'a [ProcessRecord],
    filter: &str,
    sort: SortKey,
    descending: bool,
    limit: usize,
) -> Vec<&'a ProcessRecord> {
    let mut ranked = filter_processes(records, filter);
    if descending {
        ranked.sort_by(|a, b| sort.compare(b, a));
    } else {
        ranked.sort_by(|a, b| sort.compare(a, b));
    }
    ranked.truncate(limit);
    ranked
}
