use deposit_interfaces::api::deposit_server::{
    interface::DepositServerClientInterface,
    types::{DepositOption, DepositRequest},
};

use super::error::CliError;
use alloy::primitives::B256;

/// Sends the form values verbatim and returns the confirmed transaction hash.
pub async fn deposit<C: DepositServerClientInterface>(
    client: &C,
    option: DepositOption,
    amount: &str,
) -> Result<B256, CliError> {
    log::info!("Depositing {} {}", amount, option.label());
    let request = DepositRequest::new(option, amount);
    let response = client
        .deposit(&request)
        .await
        .map_err(CliError::DepositFailed)?;
    Ok(response.tx_hash)
}

pub fn format_success(tx_hash: B256) -> String {
    format!("Success! Transaction Hash: {tx_hash:?}")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use deposit_client_sdk::external_api::deposit_server::DepositServerClient;
    use deposit_interfaces::api::{
        deposit_server::types::DepositResponse, error::ServerError,
    };
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::cell::RefCell;

    use super::*;

    struct RecordingClient {
        requests: RefCell<Vec<DepositRequest>>,
        response: fn() -> Result<DepositResponse, ServerError>,
    }

    #[async_trait(?Send)]
    impl DepositServerClientInterface for RecordingClient {
        async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse, ServerError> {
            self.requests.borrow_mut().push(request.clone());
            (self.response)()
        }
    }

    #[tokio::test]
    async fn test_amount_is_forwarded_verbatim() {
        let client = RecordingClient {
            requests: RefCell::new(vec![]),
            response: || {
                Err(ServerError::ServerError(
                    400,
                    "Invalid request parameters".to_string(),
                    None,
                    "http://localhost:5000/deposit".to_string(),
                ))
            },
        };

        let result = deposit(&client, DepositOption::Native, "").await;

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].deposit_option, Some(json!(0)));
        assert_eq!(requests[0].amount, Some(json!("")));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid request parameters");
    }

    #[tokio::test]
    async fn test_deposit_against_server() {
        let mut server = Server::new_async().await;
        let tx_hash = B256::repeat_byte(0x0f);
        let mock = server
            .mock("POST", "/deposit")
            .match_body(Matcher::PartialJsonString(
                r#"{"depositOption":1,"amount":"50"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success":true,"txHash":"{tx_hash}"}}"#))
            .create_async()
            .await;

        let client = DepositServerClient::new(&server.url());
        let result = deposit(&client, DepositOption::Token, "50").await.unwrap();

        assert_eq!(result, tx_hash);
        assert_eq!(
            format_success(result),
            format!("Success! Transaction Hash: 0x{}", "0f".repeat(32))
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_details_are_shown() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/deposit")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Deposit failed","details":"insufficient funds"}"#)
            .create_async()
            .await;

        let client = DepositServerClient::new(&server.url());
        let err = deposit(&client, DepositOption::Native, "1")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error: Deposit failed\nDetails: insufficient funds"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back_to_transport_error() {
        let client = DepositServerClient::new("http://127.0.0.1:9");
        let err = deposit(&client, DepositOption::Native, "1")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Error: Network error:"));
    }
}
