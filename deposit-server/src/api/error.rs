use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use deposit_interfaces::api::deposit_server::types::{ErrorResponse, INVALID_REQUEST_PARAMETERS};

#[derive(Debug, thiserror::Error)]
pub enum DepositApiError {
    #[error("{}", INVALID_REQUEST_PARAMETERS)]
    InvalidRequest,

    #[error("Deposit failed: {0}")]
    DepositFailed(String),
}

impl ResponseError for DepositApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            DepositApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            DepositApiError::DepositFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            DepositApiError::InvalidRequest => ErrorResponse::invalid_request(),
            DepositApiError::DepositFailed(details) => ErrorResponse::deposit_failed(details),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
