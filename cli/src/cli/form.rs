use dialoguer::{Input, Select};
use deposit_interfaces::api::deposit_server::types::DepositOption;

use super::error::CliError;

const DEPOSIT_OPTIONS: [DepositOption; 2] = [DepositOption::Native, DepositOption::Token];

pub fn prompt_deposit_option() -> Result<DepositOption, CliError> {
    let labels: Vec<&str> = DEPOSIT_OPTIONS.iter().map(|o| o.label()).collect();
    let index = Select::new()
        .with_prompt("Deposit Option")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(DEPOSIT_OPTIONS[index])
}

// empty input is sent as is and rejected by the server
pub fn prompt_amount() -> Result<String, CliError> {
    let amount = Input::<String>::new()
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;
    Ok(amount)
}
