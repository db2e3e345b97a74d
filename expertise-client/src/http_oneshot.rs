//! Oneshot HTTP 客户端 - 内存通信
//!
//! 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::http::{HttpClient, decode_body};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的服务器-客户端通信，零网络开销。
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use expertise_client::OneshotHttpClient;
///
/// let router: Router = fake_backend();
/// let client = OneshotHttpClient::new(router);
/// let page: Paginated<Bank> = client.get("banks?page=1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    ///
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// 设置认证 token
    pub async fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().await;
        *guard = token;
    }

    /// 获取当前 token
    pub async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// 构建请求 (带认证头)
    async fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.get_token().await {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::ACCEPT, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    /// 执行请求并处理响应
    async fn execute(&self, request: Request<Body>) -> ClientResult<Vec<u8>> {
        let method = request.method().clone();
        let path = request.uri().to_string();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        tracing::debug!(%method, path = %path, status = status.as_u16(), "in-process response");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status, &text));
        }

        Ok(body_bytes.to_vec())
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty()).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = Body::from(serde_json::to_vec(body)?);
        let request = self.build_request(Method::POST, path, body).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = Body::from(serde_json::to_vec(body)?);
        let request = self.build_request(Method::PUT, path, body).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn put_empty(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::PUT, path, Body::empty()).await?;
        self.execute(request).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::DELETE, path, Body::empty()).await?;
        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_token_is_forwarded() {
        let router = Router::new().route(
            "/whoami",
            get(|headers: http::HeaderMap| async move {
                let auth = headers
                    .get(http::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string();
                axum::Json(auth)
            }),
        );
        let client = OneshotHttpClient::new(router);

        let anonymous: String = client.get("whoami").await.unwrap();
        assert_eq!(anonymous, "none");

        client.set_token(Some("t0k3n".into())).await;
        let authed: String = client.get("/whoami").await.unwrap();
        assert_eq!(authed, "Bearer t0k3n");
    }
}
