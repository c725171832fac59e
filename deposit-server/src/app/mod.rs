pub mod deposit_server;
pub mod error;
pub mod request;
pub mod types;

#[cfg(test)]
pub mod mock_contract;
