use std::fmt;

use alloy::primitives::B256;
use deposit_interfaces::api::deposit_server::types::DepositOption;

/// Lifecycle of a single deposit request.
///
/// `Received -> Validated -> Submitted -> Confirmed | Failed`, where `Failed`
/// is entered from `Validated` or `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositStage {
    Received,
    Validated,
    Submitted,
    Confirmed,
    Failed,
}

impl fmt::Display for DepositStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepositStage::Received => "received",
            DepositStage::Validated => "validated",
            DepositStage::Submitted => "submitted",
            DepositStage::Confirmed => "confirmed",
            DepositStage::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// A request that passed validation. `amount` is the caller's text, unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeposit {
    pub option: DepositOption,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositResult {
    Confirmed {
        tx_hash: B256,
    },
    Failed {
        /// Stage reached before the failure.
        failed_at: DepositStage,
        error_message: String,
    },
}

impl DepositResult {
    pub fn success(&self) -> bool {
        matches!(self, DepositResult::Confirmed { .. })
    }

    pub fn transaction_hash(&self) -> Option<B256> {
        match self {
            DepositResult::Confirmed { tx_hash } => Some(*tx_hash),
            DepositResult::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DepositResult::Confirmed { .. } => None,
            DepositResult::Failed { error_message, .. } => Some(error_message),
        }
    }

    pub fn stage(&self) -> DepositStage {
        match self {
            DepositResult::Confirmed { .. } => DepositStage::Confirmed,
            DepositResult::Failed { .. } => DepositStage::Failed,
        }
    }
}
