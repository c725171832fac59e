pub mod deposit;
pub mod error;
pub mod form;
