use alloy::primitives::Address;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mood-tui", about = "Terminal client for the on-chain mood contract")]
pub struct Config {
    /// RPC endpoint URL (overrides the chain preset's default)
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Chain preset (coston2, flare, songbird, coston)
    #[arg(long, default_value = "coston2")]
    pub chain: String,

    /// Mood contract address (defaults to the Coston2 deployment)
    #[arg(long)]
    pub contract: Option<Address>,

    /// Hex private key used to sign mood updates; without it the app is read-only
    #[arg(long, env = "MOOD_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Tick rate in milliseconds for UI refresh
    #[arg(long, default_value = "100")]
    pub tick_rate_ms: u64,
}
