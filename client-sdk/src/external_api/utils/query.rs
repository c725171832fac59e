use deposit_interfaces::api::{deposit_server::types::ErrorResponse, error::ServerError};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

pub async fn post_request<B: Serialize, R: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    body: &B,
) -> Result<R, ServerError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    let response = client
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url).await
}

async fn handle_response<R: DeserializeOwned>(
    response: Response,
    url: &str,
) -> Result<R, ServerError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        let (error, details) = match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_resp) => (error_resp.error, error_resp.details),
            Err(_) => (error_text, None),
        };
        return Err(ServerError::ServerError(
            status.as_u16(),
            error,
            details,
            url.to_string(),
        ));
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ServerError::DeserializationError(e.to_string()))
}
