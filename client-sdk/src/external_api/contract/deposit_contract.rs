use std::time::Duration;

use alloy::{
    network::ReceiptResponse as _,
    primitives::{Address, B256},
    providers::{PendingTransactionBuilder, Provider as _},
    sol,
};
use async_trait::async_trait;

use super::{
    error::BlockchainError,
    handlers::{check_receipt_status, handle_send_error},
    interface::{DepositCall, DepositContractInterface, DepositReceipt},
    utils::SignerProvider,
};

sol! {
    #[sol(rpc)]
    contract TransferToken {
        function deposit(uint8 option, uint256 amount) external payable;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationConfig {
    pub required_confirmations: u64,
    /// `None` waits for the receipt indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            required_confirmations: 1,
            timeout: None,
        }
    }
}

#[derive(Clone)]
pub struct DepositContract {
    pub provider: SignerProvider,
    pub address: Address,
    pub confirmation: ConfirmationConfig,
}

impl DepositContract {
    pub fn new(provider: SignerProvider, address: Address, confirmation: ConfirmationConfig) -> Self {
        Self {
            provider,
            address,
            confirmation,
        }
    }
}

#[async_trait]
impl DepositContractInterface for DepositContract {
    async fn send_deposit(&self, call: DepositCall) -> Result<B256, BlockchainError> {
        let contract = TransferToken::new(self.address, self.provider.clone());
        let pending_tx = contract
            .deposit(call.option.as_u8(), call.amount)
            .value(call.value)
            .send()
            .await
            .map_err(|e| handle_send_error("deposit", e))?;
        let tx_hash = *pending_tx.tx_hash();
        log::info!("deposit tx hash: {tx_hash:?}");
        Ok(tx_hash)
    }

    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<DepositReceipt, BlockchainError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(self.confirmation.required_confirmations)
            .with_timeout(self.confirmation.timeout)
            .get_receipt()
            .await
            .map_err(|e| BlockchainError::ConfirmationError(tx_hash, e.to_string()))?;
        check_receipt_status("deposit", tx_hash, receipt.status())?;
        Ok(DepositReceipt {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        network::EthereumWallet,
        primitives::U256,
        providers::{mock::Asserter, Provider as _, ProviderBuilder},
        signers::local::PrivateKeySigner,
    };

    use super::*;

    fn get_mocked_contract(asserter: Asserter) -> DepositContract {
        let signer: PrivateKeySigner =
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
                .parse()
                .unwrap(); // anvil key
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_mocked_client(asserter)
            .erased();
        DepositContract::new(provider, Address::repeat_byte(0x11), ConfirmationConfig::default())
    }

    #[tokio::test]
    async fn test_send_deposit_insufficient_funds() {
        let asserter = Asserter::new();
        // every filler request fails the same way
        for _ in 0..8 {
            asserter.push_failure_msg("insufficient funds for gas * price + value");
        }
        let contract = get_mocked_contract(asserter);

        let result = contract
            .send_deposit(DepositCall::native(U256::from(10u64).pow(U256::from(18))))
            .await;

        match result {
            Err(BlockchainError::InsufficientFunds(msg)) => {
                assert!(msg.contains("insufficient funds for gas * price + value"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_deposit_rpc_rejection() {
        let asserter = Asserter::new();
        for _ in 0..8 {
            asserter.push_failure_msg("nonce too low");
        }
        let contract = get_mocked_contract(asserter);

        let result = contract.send_deposit(DepositCall::token(U256::from(50u64))).await;

        match result {
            Err(BlockchainError::TransactionError(msg)) => assert!(msg.contains("nonce too low")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_confirmation_defaults_to_unbounded_wait() {
        let config = ConfirmationConfig::default();
        assert_eq!(config.required_confirmations, 1);
        assert_eq!(config.timeout, None);
    }
}
