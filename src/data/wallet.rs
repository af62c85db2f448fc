use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{Result, WrapErr};

use crate::utils;

/// Wallet connection state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connected {
        address: Address,
    },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            WalletState::Connected { address } => Some(*address),
            WalletState::Disconnected => None,
        }
    }

    /// Format for display ("0xd8dA6B...6045" or "read-only")
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected { address } => utils::truncate_address(address),
            WalletState::Disconnected => "read-only".to_string(),
        }
    }
}

/// Parse a hex private key (with or without a 0x prefix) into a local signer.
pub fn load_signer(raw: &str) -> Result<PrivateKeySigner> {
    raw.trim()
        .parse::<PrivateKeySigner>()
        .wrap_err("Invalid private key")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known anvil/hardhat dev key #0; never holds real funds.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_disconnected_state() {
        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.display_name(), "read-only");
    }

    #[test]
    fn test_connected_state() {
        let address: Address = DEV_ADDRESS.parse().unwrap();
        let state = WalletState::Connected { address };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some(address));
        assert!(state.display_name().contains("..."));
    }

    #[test]
    fn test_load_signer_derives_address() {
        let signer = load_signer(DEV_KEY).unwrap();
        let expected: Address = DEV_ADDRESS.parse().unwrap();
        assert_eq!(signer.address(), expected);
    }

    #[test]
    fn test_load_signer_trims_whitespace() {
        let signer = load_signer(&format!("  {DEV_KEY}\n")).unwrap();
        let expected: Address = DEV_ADDRESS.parse().unwrap();
        assert_eq!(signer.address(), expected);
    }

    #[test]
    fn test_load_signer_rejects_garbage() {
        assert!(load_signer("not-a-key").is_err());
        assert!(load_signer("0x1234").is_err());
    }
}
