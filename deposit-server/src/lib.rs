use alloy::primitives::{Address, B256};
use serde::Deserialize;

pub mod api;
pub mod app;

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,

    pub rpc_url: String,
    pub private_key: B256,
    pub contract_address: Address,

    // confirmation settings
    pub confirmation_timeout: Option<u64>,
    pub required_confirmations: Option<u64>,

    pub token_decimals: Option<u8>,
}

fn default_port() -> u16 {
    5000
}
