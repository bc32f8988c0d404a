use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::models::{AccountsResponse, ApiError, ListTransactionsParams, TransactionsResponse};

/// Mercury API client for the read-only account and transaction
/// endpoints. Requests are never retried.
pub struct MercuryClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl MercuryClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.mercury.com/api/v1";

    /// Create a new Mercury API client.
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with a custom base URL (for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
        }
    }

    /// Default headers with bearer authorization.
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| ApiError::Request(format!("failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Map a non-200 response to an error. The body is carried as plain
    /// text and is never decoded as JSON.
    fn status_error(status: StatusCode, body: String) -> ApiError {
        match status.as_u16() {
            400 => ApiError::BadRequest(body),
            401 => ApiError::Unauthorized(body),
            403 => ApiError::Forbidden(body),
            404 => ApiError::NotFound(body),
            code @ 500..=599 => {
                warn!("server error {}: {}", code, body);
                ApiError::Server(code, body)
            }
            code => ApiError::Http(code, body),
        }
    }

    /// GET /accounts
    ///
    /// Lists every account visible to the API key.
    pub async fn list_accounts(&self) -> Result<AccountsResponse, ApiError> {
        let url = format!("{}/accounts", self.base_url);
        let headers = self.create_headers()?;

        debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        response
            .json::<AccountsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET /account/{id}/transactions
    ///
    /// Lists transactions for one account, newest first, honoring any
    /// query parameters that are set.
    pub async fn list_transactions(
        &self,
        account_id: &str,
        params: &ListTransactionsParams,
    ) -> Result<TransactionsResponse, ApiError> {
        let url = format!("{}/account/{}/transactions", self.base_url, account_id);
        let headers = self.create_headers()?;
        let query = params.to_query();

        debug!("GET {} with {} query param(s)", url, query.len());
        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(&query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        response
            .json::<TransactionsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
