use std::sync::Arc;

use alloy::primitives::{
    utils::{parse_units, ParseUnits},
    B256, U256,
};
use deposit_client_sdk::external_api::contract::interface::{
    DepositCall, DepositContractInterface,
};
use deposit_interfaces::api::deposit_server::types::{DepositOption, DepositRequest};
use tracing::instrument;

use super::{
    error::{DepositServerError, ValidationError},
    request::validate_request,
    types::{DepositResult, DepositStage},
};

pub const NATIVE_DECIMALS: u8 = 18;
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Turns deposit requests into contract calls and reports their outcome.
pub struct DepositServer {
    pub contract: Arc<dyn DepositContractInterface>,
    pub token_decimals: u8,
}

impl DepositServer {
    pub fn new(contract: Arc<dyn DepositContractInterface>, token_decimals: u8) -> Self {
        Self {
            contract,
            token_decimals,
        }
    }

    /// Validates the raw request and, if it is well formed, submits it.
    /// Only validation failures are returned as `Err`.
    pub async fn deposit(&self, request: &DepositRequest) -> Result<DepositResult, ValidationError> {
        tracing::debug!(stage = %DepositStage::Received, "deposit request");
        let deposit = validate_request(request).inspect_err(|e| {
            tracing::warn!(stage = %DepositStage::Received, error = %e, "invalid deposit request");
        })?;
        Ok(self.submit_deposit(deposit.option, &deposit.amount).await)
    }

    #[instrument(skip(self))]
    pub async fn submit_deposit(&self, option: DepositOption, amount: &str) -> DepositResult {
        match self.send_and_confirm(option, amount).await {
            Ok(tx_hash) => {
                tracing::info!(stage = %DepositStage::Confirmed, ?tx_hash, "deposit confirmed");
                DepositResult::Confirmed { tx_hash }
            }
            Err(e) => {
                let failed_at = e.stage();
                tracing::error!(stage = %DepositStage::Failed, %failed_at, error = %e, "deposit failed");
                DepositResult::Failed {
                    failed_at,
                    error_message: e.to_string(),
                }
            }
        }
    }

    /// Builds the contract call for the given option.
    pub fn build_call(
        &self,
        option: DepositOption,
        amount: &str,
    ) -> Result<DepositCall, DepositServerError> {
        let call = match option {
            DepositOption::Native => DepositCall::native(to_smallest_unit(amount, NATIVE_DECIMALS)?),
            DepositOption::Token => {
                DepositCall::token(to_smallest_unit(amount, self.token_decimals)?)
            }
        };
        Ok(call)
    }

    async fn send_and_confirm(
        &self,
        option: DepositOption,
        amount: &str,
    ) -> Result<B256, DepositServerError> {
        let call = self.build_call(option, amount)?;
        tracing::debug!(stage = %DepositStage::Validated, ?call, "deposit call built");

        let tx_hash = self
            .contract
            .send_deposit(call)
            .await
            .map_err(DepositServerError::Submission)?;
        tracing::info!(stage = %DepositStage::Submitted, ?tx_hash, "deposit submitted");

        let receipt = self
            .contract
            .wait_for_confirmation(tx_hash)
            .await
            .map_err(DepositServerError::Confirmation)?;
        tracing::debug!(?tx_hash, block_number = ?receipt.block_number, "deposit receipt");
        Ok(tx_hash)
    }
}

/// Scales decimal text to an integer with `decimals` fractional digits.
/// Fractional digits beyond `decimals` are rejected unless they are zeros.
pub fn to_smallest_unit(amount: &str, decimals: u8) -> Result<U256, DepositServerError> {
    if let Some((_, fraction)) = amount.split_once('.') {
        if fraction.trim_end_matches('0').len() > decimals as usize {
            return Err(DepositServerError::InvalidAmount(format!(
                "fractional component exceeds decimals: {amount}"
            )));
        }
    }
    match parse_units(amount, decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(DepositServerError::InvalidAmount(format!(
            "negative amount: {amount}"
        ))),
        Err(e) => Err(DepositServerError::InvalidAmount(format!("{amount}: {e}"))),
    }
}
