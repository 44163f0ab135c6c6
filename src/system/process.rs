use serde::Serialize;

use super::memory::ProcessMemory;

pub const UNKNOWN_PROCESS_NAME: &str = "<unknown>";

/// One process as seen in a single snapshot. A pid says nothing about
/// identity across snapshots since the OS may reuse it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub memory: ProcessMemory,
    pub owner: Option<String>,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, memory: ProcessMemory) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            UNKNOWN_PROCESS_NAME.to_string()
        } else {
            name
        };
        Self {
            pid,
            name,
            memory,
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }

    /// Empty filters match everything. Otherwise the filter is a
    /// case-insensitive substring of the name, or exactly the pid.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&filter.to_lowercase()) || self.pid.to_string() == filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, name: &str) -> ProcessRecord {
        ProcessRecord::new(pid, name, ProcessMemory::default())
    }

    #[test]
    fn empty_name_gets_placeholder() {
        assert_eq!(record(7, "").name, UNKNOWN_PROCESS_NAME);
        assert_eq!(record(7, "   ").name, UNKNOWN_PROCESS_NAME);
        assert_eq!(record(7, "sshd").name, "sshd");
    }

    #[test]
    fn name_match_ignores_case() {
        let p = record(1, "Chrome Helper");
        assert!(p.matches_filter("chrome"));
        assert!(p.matches_filter("HELPER"));
        assert!(!p.matches_filter("firefox"));
    }

    #[test]
    fn pid_match_is_exact() {
        let p = record(12345, "worker");
        assert!(p.matches_filter("12345"));
        assert!(!p.matches_filter("123"));
        assert!(!p.matches_filter("2345"));
    }

    #[test]
    fn digits_in_name_still_match_as_substring() {
        let p = record(9, "python3");
        assert!(p.matches_filter("3"));
    }

    #[test]
    fn owner_is_optional() {
        let p = record(1, "init").with_owner(Some("root".into()));
        assert_eq!(p.owner.as_deref(), Some("root"));
        assert!(record(1, "init").owner.is_none());
    }
}
