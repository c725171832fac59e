use deposit_client_sdk::external_api::contract::error::BlockchainError;

use super::types::DepositStage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Deposit option is missing")]
    MissingDepositOption,

    #[error("Deposit option is not a number: {0}")]
    DepositOptionNotNumber(String),

    #[error("Unknown deposit option: {0}")]
    UnknownDepositOption(String),

    #[error("Amount is missing")]
    MissingAmount,

    #[error("Amount is zero: {0}")]
    ZeroAmount(String),

    #[error("Amount must be a string or a number: {0}")]
    InvalidAmountType(String),
}

/// Failures after validation. The message of the wrapped error is what the
/// caller sees as `details`.
#[derive(Debug, thiserror::Error)]
pub enum DepositServerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("{0}")]
    Submission(BlockchainError),

    #[error("{0}")]
    Confirmation(BlockchainError),
}

impl DepositServerError {
    /// Last stage the deposit reached before failing.
    pub fn stage(&self) -> DepositStage {
        match self {
            DepositServerError::InvalidAmount(_) | DepositServerError::Submission(_) => {
                DepositStage::Validated
            }
            DepositServerError::Confirmation(_) => DepositStage::Submitted,
        }
    }
}
