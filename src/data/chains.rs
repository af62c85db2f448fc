use crate::data::types::ChainConfig;

/// Get a chain configuration preset by name.
pub fn get_chain_config(name: &str) -> Option<ChainConfig> {
    match name.to_lowercase().as_str() {
        "coston2" | "c2" => Some(ChainConfig {
            name: "Flare Coston2".to_string(),
            chain_id: 114,
            rpc_url: "https://coston2-api.flare.network/ext/C/rpc".to_string(),
            symbol: "C2FLR".to_string(),
            explorer_url: Some("https://coston2-explorer.flare.network".to_string()),
        }),
        "flare" | "flr" => Some(ChainConfig {
            name: "Flare".to_string(),
            chain_id: 14,
            rpc_url: "https://flare-api.flare.network/ext/C/rpc".to_string(),
            symbol: "FLR".to_string(),
            explorer_url: Some("https://flare-explorer.flare.network".to_string()),
        }),
        "songbird" | "sgb" => Some(ChainConfig {
            name: "Songbird".to_string(),
            chain_id: 19,
            rpc_url: "https://songbird-api.flare.network/ext/C/rpc".to_string(),
            symbol: "SGB".to_string(),
            explorer_url: Some("https://songbird-explorer.flare.network".to_string()),
        }),
        "coston" => Some(ChainConfig {
            name: "Flare Coston".to_string(),
            chain_id: 16,
            rpc_url: "https://coston-api.flare.network/ext/C/rpc".to_string(),
            symbol: "CFLR".to_string(),
            explorer_url: Some("https://coston-explorer.flare.network".to_string()),
        }),
        _ => None,
    }
}

/// Return a list of all supported chain names.
pub fn supported_chains() -> Vec<&'static str> {
    vec!["coston2", "flare", "songbird", "coston"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coston2_config() {
        let config = get_chain_config("coston2").unwrap();
        assert_eq!(config.chain_id, 114);
        assert_eq!(config.symbol, "C2FLR");
    }

    #[test]
    fn test_coston2_aliases() {
        assert!(get_chain_config("c2").is_some());
        assert!(get_chain_config("Coston2").is_some());
    }

    #[test]
    fn test_flare_config() {
        let config = get_chain_config("flare").unwrap();
        assert_eq!(config.chain_id, 14);
        assert_eq!(config.rpc_url, "https://flare-api.flare.network/ext/C/rpc");
    }

    #[test]
    fn test_songbird_config() {
        let config = get_chain_config("songbird").unwrap();
        assert_eq!(config.chain_id, 19);
        assert_eq!(config.symbol, "SGB");
    }

    #[test]
    fn test_coston_config() {
        let config = get_chain_config("coston").unwrap();
        assert_eq!(config.chain_id, 16);
    }

    #[test]
    fn test_unknown_chain() {
        assert!(get_chain_config("mainnet").is_none());
    }

    #[test]
    fn test_supported_chains() {
        let chains = supported_chains();
        assert_eq!(chains.len(), 4);
        assert!(chains.contains(&"coston2"));
        assert!(chains.contains(&"flare"));
    }
}
