use alloy::primitives::{B256, U256};
use async_trait::async_trait;
use deposit_interfaces::api::deposit_server::types::DepositOption;

use super::error::BlockchainError;

/// Arguments of a single `deposit(option, amount)` call plus the native value
/// attached to the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositCall {
    pub option: DepositOption,
    pub amount: U256,
    pub value: U256,
}

impl DepositCall {
    /// Native deposits carry the amount as attached value.
    pub fn native(value: U256) -> Self {
        Self {
            option: DepositOption::Native,
            amount: U256::ZERO,
            value,
        }
    }

    /// Token deposits carry the amount as an explicit argument.
    pub fn token(amount: U256) -> Self {
        Self {
            option: DepositOption::Token,
            amount,
            value: U256::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
}

/// The two network-facing stages of a deposit.
#[async_trait]
pub trait DepositContractInterface: Send + Sync {
    /// Signs and broadcasts the call, returning the pending transaction hash.
    async fn send_deposit(&self, call: DepositCall) -> Result<B256, BlockchainError>;

    /// Waits until the transaction is included and succeeded.
    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<DepositReceipt, BlockchainError>;
}
