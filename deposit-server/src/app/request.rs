use deposit_interfaces::api::deposit_server::types::{DepositOption, DepositRequest};
use serde_json::{Number, Value};

use super::{error::ValidationError, types::ValidatedDeposit};

pub fn validate_request(request: &DepositRequest) -> Result<ValidatedDeposit, ValidationError> {
    let option = parse_deposit_option(request.deposit_option.as_ref())?;
    let amount = parse_amount(request.amount.as_ref())?;
    Ok(ValidatedDeposit { option, amount })
}

fn parse_deposit_option(value: Option<&Value>) -> Result<DepositOption, ValidationError> {
    let number = match value {
        None | Some(Value::Null) => return Err(ValidationError::MissingDepositOption),
        Some(Value::Number(number)) => number,
        Some(other) => return Err(ValidationError::DepositOptionNotNumber(other.to_string())),
    };
    integral_value(number)
        .and_then(|v| u8::try_from(v).ok())
        .and_then(DepositOption::from_u8)
        .ok_or_else(|| ValidationError::UnknownDepositOption(number.to_string()))
}

// `1.0` is the same option as `1`
fn integral_value(number: &Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn parse_amount(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ValidationError::MissingAmount),
        Some(Value::String(amount)) if amount.is_empty() => Err(ValidationError::MissingAmount),
        Some(Value::String(amount)) if is_zero_like(amount) => {
            Err(ValidationError::ZeroAmount(amount.clone()))
        }
        Some(Value::String(amount)) => Ok(amount.clone()),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
            Err(ValidationError::ZeroAmount(number.to_string()))
        }
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(ValidationError::InvalidAmountType(other.to_string())),
    }
}

/// Decimal text that denotes zero, e.g. `0`, `00.000`, `-0`.
fn is_zero_like(amount: &str) -> bool {
    let digits = amount.trim().trim_start_matches(['+', '-']);
    digits.contains('0')
        && digits.matches('.').count() <= 1
        && digits.chars().all(|c| c == '0' || c == '.')
}
