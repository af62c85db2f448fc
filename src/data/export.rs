use std::fs;

use crate::data::types::MoodRecord;
use crate::utils;

/// Export the mood submission history to CSV format.
///
/// Columns: submitted_at, date, mood, tx_hash, chain_id
pub fn export_history_csv(entries: &[MoodRecord], path: &str) -> Result<String, String> {
    let file = fs::File::create(path).map_err(|e| format!("Failed to create file: {e}"))?;
    let mut wtr = csv::Writer::from_writer(file);

    // Write header
    wtr.write_record(["submitted_at", "date", "mood", "tx_hash", "chain_id"])
        .map_err(|e| format!("Failed to write CSV header: {e}"))?;

    // Write rows
    for entry in entries {
        wtr.write_record(&[
            entry.submitted_at.to_string(),
            utils::format_timestamp(entry.submitted_at),
            entry.mood.clone(),
            format!("{:#x}", entry.tx_hash),
            entry.chain_id.to_string(),
        ])
        .map_err(|e| format!("Failed to write CSV row: {e}"))?;
    }

    wtr.flush().map_err(|e| format!("Failed to flush CSV: {e}"))?;

    Ok(format!("Exported {} updates to {path}", entries.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;
    use std::fs;

    fn sample_entries() -> Vec<MoodRecord> {
        vec![
            MoodRecord {
                mood: "happy".to_string(),
                tx_hash: B256::from([0x11; 32]),
                chain_id: 114,
                submitted_at: 1700000000,
            },
            MoodRecord {
                mood: "contemplative, with commas".to_string(),
                tx_hash: B256::from([0x22; 32]),
                chain_id: 114,
                submitted_at: 1700000060,
            },
        ]
    }

    #[test]
    fn test_export_history_csv() {
        let entries = sample_entries();
        let path = "/tmp/mood-tui-test-history.csv";
        let result = export_history_csv(&entries, path);
        assert!(result.is_ok());

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("submitted_at"));
        assert!(contents.contains("happy"));
        // Commas in the mood text must not break the row
        assert!(contents.contains("\"contemplative, with commas\""));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_export_history_csv_empty() {
        let path = "/tmp/mood-tui-test-history-empty.csv";
        let result = export_history_csv(&[], path);
        assert!(result.is_ok());
        assert!(result.unwrap().contains("0 updates"));

        let _ = fs::remove_file(path);
    }
}
