use async_trait::async_trait;

use crate::api::error::ServerError;

use super::types::{DepositRequest, DepositResponse};

#[async_trait(?Send)]
pub trait DepositServerClientInterface {
    async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse, ServerError>;
}
