//! Simulated audit trail.
//!
//! Mock of how admin actions would be recorded. Real systems use central,
//! immutable audit infrastructure; this one lives and dies with the
//! process and says so in its summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded admin action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only in-memory audit log
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an action with a timestamp
    pub fn record(&mut self, action: &str, detail: &str) {
        self.entries.push(AuditEntry {
            action: action.to_string(),
            detail: detail.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Entries in record order
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Closing-slide summary of what a real audit trail would have kept
    pub fn summary(&self) -> String {
        let actions: Vec<_> = self.entries.iter().map(|e| e.action.as_str()).collect();
        format!(
            "Audit: [SIMULATED] {} admin action(s) ({}) would be logged here (timestamped).",
            self.entries.len(),
            actions.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut log = AuditLog::new();
        log.record("grant", "is_admin set for alice");
        log.record("drop", "logs table dropped");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].action, "grant");
        assert_eq!(log.entries()[1].action, "drop");
    }

    #[test]
    fn test_timestamps_are_monotone() {
        let mut log = AuditLog::new();
        log.record("grant", "first");
        log.record("drop", "second");

        let entries = log.entries();
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn test_summary_names_actions() {
        let mut log = AuditLog::new();
        log.record("grant", "is_admin set for alice");
        log.record("drop", "logs table dropped");

        let summary = log.summary();
        assert!(summary.contains("[SIMULATED]"));
        assert!(summary.contains("grant, drop"));
        assert!(summary.contains("2 admin action(s)"));
    }

    #[test]
    fn test_empty_log_summary() {
        let log = AuditLog::new();
        assert!(log.is_empty());
        assert!(log.summary().contains("0 admin action(s)"));
    }
}
