use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::B256;

use crate::data::types::MoodRecord;

const HISTORY_FILE: &str = "history.json";
const APP_DIR: &str = "mood-tui";

/// Oldest entries are dropped past this point.
const MAX_ENTRIES: usize = 200;

/// Persistent log of confirmed mood updates, stored newest-first at
/// ~/.config/mood-tui/history.json.
pub struct MoodHistory {
    pub entries: Vec<MoodRecord>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load the history from disk. Returns an empty log if the file doesn't exist.
    pub fn load() -> Self {
        let path = match history_path() {
            Some(p) => p,
            None => return Self::new(),
        };

        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(_) => return Self::new(),
        };

        let entries: Vec<MoodRecord> = match serde_json::from_str(&data) {
            Ok(e) => e,
            Err(_) => return Self::new(),
        };

        Self { entries }
    }

    /// Save the history to disk.
    pub fn save(&self) -> Result<(), String> {
        let path = history_path().ok_or("Could not determine config directory")?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("Failed to serialize history: {e}"))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write history: {e}"))?;

        Ok(())
    }

    /// Record a confirmed mood update.
    pub fn record(&mut self, mood: String, tx_hash: B256, chain_id: u64) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        self.entries.insert(
            0,
            MoodRecord {
                mood,
                tx_hash,
                chain_id,
                submitted_at: now,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
    }

    /// List all recorded updates, newest first.
    pub fn list(&self) -> &[MoodRecord] {
        &self.entries
    }
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the path to the history file.
fn history_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_DIR).join(HISTORY_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_empty() {
        let history = MoodHistory::new();
        assert!(history.entries.is_empty());
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_record_entry() {
        let mut history = MoodHistory::new();
        history.record("happy".to_string(), B256::ZERO, 114);
        assert_eq!(history.list().len(), 1);
        assert_eq!(history.list()[0].mood, "happy");
        assert_eq!(history.list()[0].chain_id, 114);
    }

    #[test]
    fn test_record_newest_first() {
        let mut history = MoodHistory::new();
        history.record("first".to_string(), B256::ZERO, 114);
        history.record("second".to_string(), B256::from([0x01; 32]), 114);
        assert_eq!(history.list()[0].mood, "second");
        assert_eq!(history.list()[1].mood, "first");
    }

    #[test]
    fn test_record_caps_entries() {
        let mut history = MoodHistory::new();
        for i in 0..(MAX_ENTRIES + 10) {
            history.record(format!("mood {i}"), B256::ZERO, 114);
        }
        assert_eq!(history.list().len(), MAX_ENTRIES);
        // The newest entry survives the cap
        assert_eq!(history.list()[0].mood, format!("mood {}", MAX_ENTRIES + 9));
    }

    #[test]
    fn test_history_path() {
        // Should return Some on most systems
        if let Some(p) = history_path() {
            assert!(p.to_string_lossy().contains("mood-tui"));
            assert!(p.to_string_lossy().contains("history.json"));
        }
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let mut history = MoodHistory::new();
        history.record("serialized".to_string(), B256::from([0x2a; 32]), 114);

        let json = serde_json::to_string(&history.entries).unwrap();
        let parsed: Vec<MoodRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].mood, "serialized");
        assert_eq!(parsed[0].tx_hash, B256::from([0x2a; 32]));
    }
}
