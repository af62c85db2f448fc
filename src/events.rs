use alloy::primitives::{B256, U256};

use crate::data::types::MoodRecord;

/// Views the user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Mood,
    History,
}

/// Events sent from background data tasks (and components) to the main app loop
#[derive(Debug)]
pub enum AppEvent {
    // Data loaded
    MoodLoaded(Option<String>),
    BalanceLoaded(U256),
    HistoryLoaded(Vec<MoodRecord>),

    // Write lifecycle: the write call resolved with a transaction hash,
    // the receipt wait finished, or either of them failed.
    MoodSubmitted(B256),
    MoodConfirmed { hash: B256, block_number: Option<u64> },
    MoodFailed(String),

    // Component commands
    SubmitMood(String),
    RefreshMood,
    ExportHistory,

    // Export
    ExportComplete(String),

    // Navigation
    Back,

    // Status
    Error(String),
    Connected(u64), // chain_id
}
