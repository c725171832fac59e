use async_trait::async_trait;
use deposit_interfaces::api::{
    deposit_server::{
        interface::DepositServerClientInterface,
        types::{DepositRequest, DepositResponse},
    },
    error::ServerError,
};

use super::utils::query::post_request;

#[derive(Debug, Clone)]
pub struct DepositServerClient {
    client: reqwest::Client,
    base_url: String,
}

impl DepositServerClient {
    pub fn new(base_url: &str) -> Self {
        DepositServerClient {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl DepositServerClientInterface for DepositServerClient {
    async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse, ServerError> {
        post_request(&self.client, &self.base_url, "/deposit", request).await
    }
}
