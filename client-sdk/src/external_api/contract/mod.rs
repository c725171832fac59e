pub mod deposit_contract;
pub mod error;
pub mod handlers;
pub mod interface;
pub mod utils;
