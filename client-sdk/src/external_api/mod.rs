pub mod contract;
pub mod deposit_server;
pub mod utils;
