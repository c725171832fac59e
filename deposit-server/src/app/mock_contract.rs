use alloy::primitives::B256;
use async_trait::async_trait;
use deposit_client_sdk::external_api::contract::{
    error::BlockchainError,
    interface::{DepositCall, DepositContractInterface, DepositReceipt},
};

mockall::mock! {
    pub DepositContract {}

    #[async_trait]
    impl DepositContractInterface for DepositContract {
        async fn send_deposit(&self, call: DepositCall) -> Result<B256, BlockchainError>;

        async fn wait_for_confirmation(
            &self,
            tx_hash: B256,
        ) -> Result<DepositReceipt, BlockchainError>;
    }
}
