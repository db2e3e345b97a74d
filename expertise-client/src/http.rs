//! HTTP transport
//!
//! [`HttpClient`] is the seam between resource APIs and the wire. The
//! network implementation talks to the real backend with `reqwest`; the
//! in-process implementation (feature `in-process`) drives an axum `Router`
//! directly.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP 客户端 trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// PUT without body; the response body is ignored
    async fn put_empty(&self, path: &str) -> ClientResult<()>;
    /// DELETE; the response body is ignored
    async fn delete(&self, path: &str) -> ClientResult<()>;
}

/// Decode a success body, treating an empty body as JSON `null`
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("API base URL is empty".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute(&self, method: Method, path: &str, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!(%method, path = %path, error = %e, "request failed");
            ClientError::from(e)
        })?;
        let status = response.status();
        tracing::debug!(%method, path = %path, status = status.as_u16(), "response received");

        if !status.is_success() {
            let text = response.text().await?;
            return Err(ClientError::from_status(status, &text));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path);
        let bytes = self.execute(Method::GET, path, req).await?;
        decode_body(&bytes)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        let bytes = self.execute(Method::POST, path, req).await?;
        decode_body(&bytes)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).json(body);
        let bytes = self.execute(Method::PUT, path, req).await?;
        decode_body(&bytes)
    }

    async fn put_empty(&self, path: &str) -> ClientResult<()> {
        let req = self.request(Method::PUT, path);
        self.execute(Method::PUT, path, req).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, req).await?;
        Ok(())
    }
}
