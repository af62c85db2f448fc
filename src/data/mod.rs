pub mod chains;
pub mod contract;
pub mod export;
pub mod history;
pub mod provider;
pub mod types;
pub mod wallet;

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::RwLock;
use tokio::sync::mpsc;

use crate::data::history::MoodHistory;
use crate::data::provider::EthProvider;
use crate::events::AppEvent;

pub struct MoodService {
    provider: Arc<EthProvider>,
    contract: Address,
    history: Arc<RwLock<MoodHistory>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl MoodService {
    pub fn new(
        provider: EthProvider,
        contract: Address,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            contract,
            history: Arc::new(RwLock::new(MoodHistory::load())),
            event_tx,
        }
    }

    /// Fetch the current on-chain mood and send it as an event.
    /// An empty stored string means no mood has been set yet.
    pub fn fetch_mood(&self) {
        let provider = Arc::clone(&self.provider);
        let contract = self.contract;
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match provider.get_mood(contract).await {
                Ok(mood) => {
                    let mood = if mood.is_empty() { None } else { Some(mood) };
                    let _ = tx.send(AppEvent::MoodLoaded(mood));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!("Failed to read mood: {e}")));
                }
            }
        });
    }

    /// Fetch the signer's native-token balance. No-op in read-only mode.
    pub fn fetch_balance(&self) {
        let Some(address) = self.provider.signer_address() else {
            return;
        };
        let provider = Arc::clone(&self.provider);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match provider.get_balance(address).await {
                Ok(balance) => {
                    let _ = tx.send(AppEvent::BalanceLoaded(balance));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!("Failed to fetch balance: {e}")));
                }
            }
        });
    }

    /// Submit a mood update and drive it through confirmation.
    ///
    /// Empty input is a no-op. The transaction hash is reported as soon as
    /// the write call resolves; the receipt wait runs afterwards in the same
    /// task, so callers observe confirmation through events, not through
    /// this method.
    pub fn submit_mood(&self, mood: String) {
        if mood.is_empty() {
            return;
        }
        let provider = Arc::clone(&self.provider);
        let contract = self.contract;
        let history = Arc::clone(&self.history);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let hash = match provider.send_set_mood(contract, &mood).await {
                Ok(h) => h,
                Err(e) => {
                    let _ = tx.send(AppEvent::MoodFailed(format!("{e}")));
                    return;
                }
            };
            let _ = tx.send(AppEvent::MoodSubmitted(hash));

            let receipt = match provider.wait_for_confirmation(hash).await {
                Ok(r) => r,
                Err(e) => {
                    let _ = tx.send(AppEvent::MoodFailed(format!("{e}")));
                    return;
                }
            };

            if !receipt.status() {
                let _ = tx.send(AppEvent::MoodFailed(format!(
                    "Transaction {hash} reverted on-chain"
                )));
                return;
            }

            let _ = tx.send(AppEvent::MoodConfirmed {
                hash,
                block_number: receipt.block_number,
            });

            // Record the confirmed update
            {
                let mut h = history.write().await;
                h.record(mood, hash, provider.chain_id());
                if let Err(e) = h.save() {
                    let _ = tx.send(AppEvent::Error(e));
                }
                let _ = tx.send(AppEvent::HistoryLoaded(h.list().to_vec()));
            }

            // Refresh data the write invalidated: the stored mood and the
            // signer's balance (the update cost gas).
            match provider.get_mood(contract).await {
                Ok(mood) => {
                    let mood = if mood.is_empty() { None } else { Some(mood) };
                    let _ = tx.send(AppEvent::MoodLoaded(mood));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(format!("Failed to read mood: {e}")));
                }
            }
            if let Some(address) = provider.signer_address() {
                if let Ok(balance) = provider.get_balance(address).await {
                    let _ = tx.send(AppEvent::BalanceLoaded(balance));
                }
            }
        });
    }

    /// Send the persisted submission history to the app.
    pub fn load_history(&self) {
        let history = Arc::clone(&self.history);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let h = history.read().await;
            let _ = tx.send(AppEvent::HistoryLoaded(h.list().to_vec()));
        });
    }

    /// Export the submission history to a CSV file in the working directory.
    pub fn export_history(&self) {
        let history = Arc::clone(&self.history);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let h = history.read().await;
            match export::export_history_csv(h.list(), "mood-history.csv") {
                Ok(msg) => {
                    let _ = tx.send(AppEvent::ExportComplete(msg));
                }
                Err(e) => {
                    let _ = tx.send(AppEvent::Error(e));
                }
            }
        });
    }
}
