use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    providers::{DynProvider, Provider as _, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};

use super::error::BlockchainError;

/// Provider with nonce, gas and chain id fillers and a local wallet attached.
pub type SignerProvider = DynProvider;

pub fn get_signer(private_key: B256) -> Result<PrivateKeySigner, BlockchainError> {
    PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| BlockchainError::ParseError(format!("Invalid private key: {e}")))
}

pub fn get_address_from_private_key(private_key: B256) -> Result<Address, BlockchainError> {
    Ok(get_signer(private_key)?.address())
}

pub fn get_provider_with_signer(
    rpc_url: &str,
    private_key: B256,
) -> Result<SignerProvider, BlockchainError> {
    let url: Url = rpc_url
        .parse()
        .map_err(|_| BlockchainError::ParseError("Failed to parse RPC_URL".to_string()))?;
    let wallet = EthereumWallet::from(get_signer(private_key)?);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(url)
        .erased();
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    // anvil account #0
    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_address_from_private_key() {
        let key: B256 = ANVIL_KEY.parse().unwrap();
        let address = get_address_from_private_key(key).unwrap();
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        assert_eq!(address, expected);
    }

    #[test]
    fn test_zero_private_key_rejected() {
        let result = get_signer(B256::ZERO);
        assert!(matches!(result, Err(BlockchainError::ParseError(_))));
    }

    #[test]
    fn test_invalid_rpc_url_rejected() {
        let key: B256 = ANVIL_KEY.parse().unwrap();
        let result = get_provider_with_signer("not a url", key);
        assert!(matches!(result, Err(BlockchainError::ParseError(_))));
    }
}
