use alloy::primitives::B256;

use super::error::BlockchainError;

/// Classifies an error raised while sending a transaction.
pub fn handle_send_error(tx_name: &str, error: alloy::contract::Error) -> BlockchainError {
    let error_message = error.to_string();
    log::error!("{tx_name} send failed: {error_message}");
    if error_message.contains("insufficient funds") {
        BlockchainError::InsufficientFunds(error_message)
    } else {
        BlockchainError::TransactionError(error_message)
    }
}

pub fn check_receipt_status(
    tx_name: &str,
    tx_hash: B256,
    status: bool,
) -> Result<(), BlockchainError> {
    if !status {
        return Err(BlockchainError::TransactionFailed(format!(
            "{tx_name} failed with tx hash: {tx_hash:?}"
        )));
    }
    Ok(())
}
