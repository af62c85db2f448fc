use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::providers::{PendingTransactionConfig, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{Result, eyre};

use crate::data::contract;

/// The concrete provider type returned by `ProviderBuilder` depends on the
/// filler stack, so we hold it behind a trait object.
pub struct EthProvider {
    provider: Box<dyn Provider + Send + Sync>,
    chain_id: u64,
    signer_address: Option<Address>,
}

impl EthProvider {
    /// Connect read-only to a node via HTTP RPC.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        let url = rpc_url.parse()?;
        let provider = ProviderBuilder::new().on_http(url);
        let chain_id = provider.get_chain_id().await?;
        Ok(Self {
            provider: Box::new(provider),
            chain_id,
            signer_address: None,
        })
    }

    /// Connect with a local signer so mood updates can be signed and sent.
    pub async fn connect_with_wallet(rpc_url: &str, signer: PrivateKeySigner) -> Result<Self> {
        let url = rpc_url.parse()?;
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new().wallet(wallet).on_http(url);
        let chain_id = provider.get_chain_id().await?;
        Ok(Self {
            provider: Box::new(provider),
            chain_id,
            signer_address: Some(signer_address),
        })
    }

    /// Return the chain ID obtained at connection time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The signing address, if a wallet is configured.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// Read the current mood. Tries the `mood()` accessor first and falls
    /// back to `getMood()` for deployments that only expose the latter.
    pub async fn get_mood(&self, contract_addr: Address) -> Result<String> {
        match self.call_for_mood(contract_addr, contract::mood_calldata()).await {
            Ok(mood) => Ok(mood),
            Err(_) => {
                self.call_for_mood(contract_addr, contract::get_mood_calldata())
                    .await
            }
        }
    }

    async fn call_for_mood(&self, contract_addr: Address, calldata: Vec<u8>) -> Result<String> {
        let tx = TransactionRequest::default()
            .to(contract_addr)
            .input(Bytes::from(calldata).into());
        let data = self.provider.call(tx).await?;
        let mood = contract::decode_mood_return(&data)?;
        Ok(mood)
    }

    /// Broadcast a `setMood` transaction and return its hash as soon as the
    /// write call resolves. Gas, nonce, and chain ID come from the builder's
    /// fill stack; confirmation is awaited separately.
    pub async fn send_set_mood(&self, contract_addr: Address, mood: &str) -> Result<B256> {
        let from = self
            .signer_address
            .ok_or_else(|| eyre!("No wallet configured; restart with a private key"))?;
        let tx = TransactionRequest::default()
            .from(from)
            .to(contract_addr)
            .input(Bytes::from(contract::set_mood_calldata(mood)).into());
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    /// Wait for a submitted transaction to be mined, then fetch its receipt.
    /// The wait itself is the provider's own transaction watcher.
    pub async fn wait_for_confirmation(&self, hash: B256) -> Result<TransactionReceipt> {
        let watcher = self
            .provider
            .watch_pending_transaction(PendingTransactionConfig::new(hash))
            .await?;
        watcher.await?;

        self.provider
            .get_transaction_receipt(hash)
            .await?
            .ok_or_else(|| eyre!("Receipt for transaction {hash} not found"))
    }

    /// Get the native-token balance of an address at the latest block.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        let balance = self.provider.get_balance(address).await?;
        Ok(balance)
    }
}
