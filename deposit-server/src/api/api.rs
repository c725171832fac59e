use actix_web::{
    post,
    web::{Data, Json, JsonConfig, ServiceConfig},
};
use deposit_interfaces::api::deposit_server::types::{DepositRequest, DepositResponse};

use crate::{api::state::State, app::types::DepositResult};

use super::error::DepositApiError;

#[post("/deposit")]
pub async fn deposit(
    state: Data<State>,
    request: Json<DepositRequest>,
) -> Result<Json<DepositResponse>, DepositApiError> {
    let result = state
        .deposit_server
        .deposit(&request)
        .await
        .map_err(|_| DepositApiError::InvalidRequest)?;
    match result {
        DepositResult::Confirmed { tx_hash } => Ok(Json(DepositResponse {
            success: true,
            tx_hash,
        })),
        DepositResult::Failed { error_message, .. } => {
            Err(DepositApiError::DepositFailed(error_message))
        }
    }
}

/// Bodies that are not a JSON object get the same 400 as invalid fields.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "malformed deposit request body");
        DepositApiError::InvalidRequest.into()
    })
}

pub fn deposit_server_routes(cfg: &mut ServiceConfig) {
    cfg.service(deposit);
}
