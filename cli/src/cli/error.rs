use deposit_interfaces::api::error::ServerError;
use envy::Error as EnvyError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Env error: {0}")]
    EnvError(#[from] EnvyError),

    #[error("Input error: {0}")]
    InputError(#[from] dialoguer::Error),

    #[error("{}", format_server_error(.0))]
    DepositFailed(ServerError),
}

/// Prefers the server's own error text over the transport description.
pub fn format_server_error(error: &ServerError) -> String {
    match error {
        ServerError::ServerError(_, message, Some(details), _) => {
            format!("Error: {message}\nDetails: {details}")
        }
        ServerError::ServerError(_, message, None, _) => format!("Error: {message}"),
        other => format!("Error: {other}"),
    }
}
