mod app;
mod components;
mod config;
mod data;
mod events;
mod theme;
mod utils;

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::data::MoodService;
use crate::data::provider::EthProvider;
use crate::data::wallet::WalletState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    let chain = data::chains::get_chain_config(&config.chain).ok_or_else(|| {
        eyre!(
            "Unknown chain '{}' (expected one of: {})",
            config.chain,
            data::chains::supported_chains().join(", ")
        )
    })?;

    // CLI RPC URL wins over the chain preset
    let rpc_url = config.rpc_url.unwrap_or_else(|| chain.rpc_url.clone());
    let contract_addr = config.contract.unwrap_or(data::contract::MOOD_CONTRACT);

    // Load the signing wallet, if one was configured
    let signer = match config.private_key.as_deref() {
        Some(key) => Some(data::wallet::load_signer(key)?),
        None => None,
    };

    // Connect to the node
    eprintln!("Connecting to {rpc_url}...");
    let provider = match signer {
        Some(signer) => EthProvider::connect_with_wallet(&rpc_url, signer).await?,
        None => EthProvider::connect(&rpc_url).await?,
    };
    let chain_id = provider.chain_id();
    let wallet = match provider.signer_address() {
        Some(address) => WalletState::Connected { address },
        None => WalletState::Disconnected,
    };
    eprintln!("Connected to chain {chain_id}");
    match wallet.address() {
        Some(address) => eprintln!("Wallet: {address}"),
        None => eprintln!("No private key provided; running read-only"),
    }

    // Create event channel
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // Send initial connected event
    let _ = event_tx.send(events::AppEvent::Connected(chain_id));

    // Create the contract service
    let service = Arc::new(MoodService::new(provider, contract_addr, event_tx.clone()));

    // Create app
    let mut app = App::with_service(service, event_rx, config.tick_rate_ms);
    app.set_chain_info(chain.name, chain.symbol, chain.explorer_url);
    app.set_wallet(wallet);

    // Initialize terminal
    let terminal = ratatui::init();
    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
