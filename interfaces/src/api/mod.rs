pub mod deposit_server;
pub mod error;
