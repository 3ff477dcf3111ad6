//! Usage tracking: execution counts and a bounded recency list.
//!
//! The ranking step reads these as scoring inputs. State is in-memory only;
//! snapshotting across restarts is the host application's business.

use std::collections::HashMap;
use std::time::Instant;

/// Maximum entries on the recency list.
pub(crate) const RECENCY_LIMIT: usize = 20;
/// Execution count above which the usage bonus stops growing.
const USAGE_CAP: u32 = 10;
/// Score added per (capped) recorded execution.
const FREQUENCY_WEIGHT: i64 = 5;
/// Maximum recency bonus, scaled down by list position.
const RECENCY_WEIGHT: f64 = 10.0;

/// Per-command execution aggregate.
#[derive(Debug, Clone)]
pub struct UsageRecord {
    /// Total recorded executions; only ever increases.
    pub count: u32,
    pub last_used: Instant,
}

/// Records command executions and derives ranking bonuses from them.
#[derive(Debug, Default)]
pub struct UsageTracker {
    records: HashMap<String, UsageRecord>,
    /// Most-recent-first command ids, no duplicates.
    recency: Vec<String>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one execution of `command_id`: bump the count, stamp the time
    /// and move the id to the front of the recency list.
    pub fn record_usage(&mut self, command_id: &str) {
        let record = self
            .records
            .entry(command_id.to_string())
            .or_insert(UsageRecord {
                count: 0,
                last_used: Instant::now(),
            });
        record.count = record.count.saturating_add(1);
        record.last_used = Instant::now();

        if let Some(position) = self.recency.iter().position(|id| id == command_id) {
            self.recency.remove(position);
        }
        self.recency.insert(0, command_id.to_string());
        self.recency.truncate(RECENCY_LIMIT);
    }

    /// Frequency bonus: capped execution count times the frequency weight.
    /// Returns 0 for unknown commands, never fails.
    pub fn usage_bonus(&self, command_id: &str) -> i64 {
        self.records.get(command_id).map_or(0, |record| {
            i64::from(record.count.min(USAGE_CAP)) * FREQUENCY_WEIGHT
        })
    }

    /// Recency bonus: scaled by how close to the front of the recency list
    /// the command sits. Returns 0 for commands not on the list.
    pub fn recency_bonus(&self, command_id: &str) -> i64 {
        let len = self.recency.len();
        self.recency
            .iter()
            .position(|id| id == command_id)
            .map_or(0, |index| {
                (RECENCY_WEIGHT * (len - index) as f64 / len as f64).round() as i64
            })
    }

    /// Execution count for a command, 0 when never used.
    pub fn count(&self, command_id: &str) -> u32 {
        self.records.get(command_id).map_or(0, |record| record.count)
    }

    /// Drop all usage state.
    pub fn reset(&mut self) {
        self.records.clear();
        self.recency.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_commands_score_zero() {
        let tracker = UsageTracker::new();
        assert_eq!(tracker.usage_bonus("missing"), 0);
        assert_eq!(tracker.recency_bonus("missing"), 0);
        assert_eq!(tracker.count("missing"), 0);
    }

    #[test]
    fn usage_bonus_grows_then_caps() {
        let mut tracker = UsageTracker::new();
        tracker.record_usage("file.save");
        assert_eq!(tracker.usage_bonus("file.save"), 5);
        for _ in 0..20 {
            tracker.record_usage("file.save");
        }
        assert_eq!(tracker.count("file.save"), 21);
        // Bonus clamps at count 10.
        assert_eq!(tracker.usage_bonus("file.save"), 50);
    }

    #[test]
    fn most_recent_command_gets_full_recency_bonus() {
        let mut tracker = UsageTracker::new();
        tracker.record_usage("a");
        tracker.record_usage("b");
        assert_eq!(tracker.recency_bonus("b"), 10);
        assert_eq!(tracker.recency_bonus("a"), 5);
    }

    #[test]
    fn reuse_moves_to_front_without_duplicating() {
        let mut tracker = UsageTracker::new();
        tracker.record_usage("a");
        tracker.record_usage("b");
        tracker.record_usage("a");
        assert_eq!(tracker.recency_bonus("a"), 10);
        assert_eq!(tracker.recency_bonus("b"), 5);
    }

    #[test]
    fn recency_list_truncates_at_the_bound() {
        let mut tracker = UsageTracker::new();
        for n in 0..(RECENCY_LIMIT + 5) {
            tracker.record_usage(&format!("cmd{n}"));
        }
        // The earliest entries fell off the tail.
        assert_eq!(tracker.recency_bonus("cmd0"), 0);
        assert_eq!(tracker.recency_bonus(&format!("cmd{}", RECENCY_LIMIT + 4)), 10);
        // Counts survive eviction from the recency list.
        assert_eq!(tracker.count("cmd0"), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = UsageTracker::new();
        tracker.record_usage("a");
        tracker.reset();
        assert_eq!(tracker.usage_bonus("a"), 0);
        assert_eq!(tracker.recency_bonus("a"), 0);
    }
}
