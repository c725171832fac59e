use std::{sync::Arc, time::Duration};

use deposit_client_sdk::external_api::contract::{
    deposit_contract::{ConfirmationConfig, DepositContract},
    utils::get_provider_with_signer,
};

use crate::{
    app::deposit_server::{DepositServer, DEFAULT_TOKEN_DECIMALS},
    Env,
};

#[derive(Clone)]
pub struct State {
    pub deposit_server: Arc<DepositServer>,
}

impl State {
    pub fn new(env: &Env) -> anyhow::Result<Self> {
        let provider = get_provider_with_signer(&env.rpc_url, env.private_key)?;
        let confirmation = ConfirmationConfig {
            required_confirmations: env.required_confirmations.unwrap_or(1),
            timeout: env.confirmation_timeout.map(Duration::from_secs),
        };
        let contract = DepositContract::new(provider, env.contract_address, confirmation);
        let deposit_server = DepositServer::new(
            Arc::new(contract),
            env.token_decimals.unwrap_or(DEFAULT_TOKEN_DECIMALS),
        );
        Ok(Self::from_deposit_server(deposit_server))
    }

    pub fn from_deposit_server(deposit_server: DepositServer) -> Self {
        State {
            deposit_server: Arc::new(deposit_server),
        }
    }
}
