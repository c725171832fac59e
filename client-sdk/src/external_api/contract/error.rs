use alloy::{primitives::B256, providers::PendingTransactionError};

#[derive(Debug, thiserror::Error)]
pub enum BlockchainError {
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Confirmation error for {0:?}: {1}")]
    ConfirmationError(B256, String),

    #[error("Contract error: {0}")]
    ContractError(#[from] alloy::contract::Error),

    #[error("Pending transaction error: {0}")]
    PendingTransactionError(#[from] PendingTransactionError),

    #[error("Parse error: {0}")]
    ParseError(String),
}
