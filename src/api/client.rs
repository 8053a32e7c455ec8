// Superhero backend HTTP client.
// Handles request construction and response status checking.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{HerodexError, Result};

const API_BASE: &str = "http://localhost:4000";

/// HTTP client for the local roster service.
#[derive(Debug, Clone)]
pub struct HeroClient {
    client: Client,
    base_url: String,
}

impl HeroClient {
    /// Create a client pointed at the default local backend.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    /// Create a client with an explicit base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("herodex-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HerodexError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request against the backend.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(HerodexError::Api)?;

        self.check_response(response).await
    }

    /// Check response status and convert failures to typed errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(HerodexError::NotFound(url))
            }
            status => Err(HerodexError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = HeroClient::with_base_url("http://localhost:4000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:4000");
    }
}
