use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// Snapshot of the mood write lifecycle: the write-in-flight and
/// receipt-wait flags, the confirmation result, the last transaction hash,
/// and the last error.
#[derive(Debug, Clone, Default)]
pub struct TxStatus {
    pub is_pending: bool,
    pub is_confirming: bool,
    pub is_confirmed: bool,
    pub hash: Option<B256>,
    pub error: Option<String>,
}

impl TxStatus {
    /// A write round-trip is in progress (submit or receipt wait).
    pub fn is_busy(&self) -> bool {
        self.is_pending || self.is_confirming
    }

    pub fn phase(&self) -> TxPhase {
        if self.error.is_some() {
            TxPhase::Failed
        } else if self.is_pending {
            TxPhase::Submitting
        } else if self.is_confirming {
            TxPhase::Confirming
        } else if self.is_confirmed {
            TxPhase::Confirmed
        } else {
            TxPhase::Idle
        }
    }

    /// A new write begins; the previous outcome is discarded.
    pub fn begin_submit(&mut self) {
        self.is_pending = true;
        self.is_confirming = false;
        self.is_confirmed = false;
        self.hash = None;
        self.error = None;
    }

    /// The write call resolved with a transaction hash.
    pub fn mark_submitted(&mut self, hash: B256) {
        self.is_pending = false;
        self.is_confirming = true;
        self.hash = Some(hash);
    }

    /// The receipt arrived and reported success.
    pub fn mark_confirmed(&mut self) {
        self.is_pending = false;
        self.is_confirming = false;
        self.is_confirmed = true;
    }

    /// The write call or the receipt wait failed. There is no automatic
    /// retry; the user must resubmit.
    pub fn mark_failed(&mut self, message: String) {
        self.is_pending = false;
        self.is_confirming = false;
        self.error = Some(message);
    }
}

/// Lifecycle phase derived from the status flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    Idle,
    Submitting,
    Confirming,
    Confirmed,
    Failed,
}

impl std::fmt::Display for TxPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxPhase::Idle => write!(f, "Idle"),
            TxPhase::Submitting => write!(f, "Submitting"),
            TxPhase::Confirming => write!(f, "Confirming"),
            TxPhase::Confirmed => write!(f, "Confirmed"),
            TxPhase::Failed => write!(f, "Failed"),
        }
    }
}

/// One confirmed mood update, as persisted in the history file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: String,
    pub tx_hash: B256,
    pub chain_id: u64,
    pub submitted_at: u64,
}

/// Chain connection preset
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub symbol: String,
    pub explorer_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_starts_idle() {
        let status = TxStatus::default();
        assert_eq!(status.phase(), TxPhase::Idle);
        assert!(!status.is_busy());
        assert!(status.hash.is_none());
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut status = TxStatus::default();

        status.begin_submit();
        assert_eq!(status.phase(), TxPhase::Submitting);
        assert!(status.is_busy());

        let hash = B256::from([0xab; 32]);
        status.mark_submitted(hash);
        assert_eq!(status.phase(), TxPhase::Confirming);
        assert!(status.is_busy());
        assert_eq!(status.hash, Some(hash));

        status.mark_confirmed();
        assert_eq!(status.phase(), TxPhase::Confirmed);
        assert!(!status.is_busy());
        // Hash survives confirmation for display
        assert_eq!(status.hash, Some(hash));
    }

    #[test]
    fn test_failure_from_submit() {
        let mut status = TxStatus::default();
        status.begin_submit();
        status.mark_failed("insufficient funds".to_string());
        assert_eq!(status.phase(), TxPhase::Failed);
        assert!(!status.is_busy());
        assert_eq!(status.error.as_deref(), Some("insufficient funds"));
    }

    #[test]
    fn test_failure_from_confirming() {
        let mut status = TxStatus::default();
        status.begin_submit();
        status.mark_submitted(B256::ZERO);
        status.mark_failed("reverted".to_string());
        assert_eq!(status.phase(), TxPhase::Failed);
        assert!(!status.is_busy());
    }

    #[test]
    fn test_resubmit_clears_previous_outcome() {
        let mut status = TxStatus::default();
        status.begin_submit();
        status.mark_failed("nope".to_string());

        status.begin_submit();
        assert_eq!(status.phase(), TxPhase::Submitting);
        assert!(status.error.is_none());
        assert!(status.hash.is_none());
        assert!(!status.is_confirmed);
    }
}
