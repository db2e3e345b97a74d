//! Typed CRUD calls for one resource
//!
//! Thin wrappers over [`HttpClient`]: no retries, no caching. Errors are
//! returned as-is to the caller.

use std::marker::PhantomData;
use std::sync::Arc;

use shared::{DataEnvelope, ListFilters, Paginated};

use crate::endpoints;
use crate::{ClientError, ClientResult, HttpClient, Resource};

/// API client for resource `R` over transport `H`
pub struct ResourceApi<R: Resource, H: HttpClient> {
    http: Arc<H>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, H: HttpClient> Clone for ResourceApi<R, H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, H: HttpClient> ResourceApi<R, H> {
    pub fn new(http: Arc<H>) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    pub fn http(&self) -> &Arc<H> {
        &self.http
    }

    /// GET `{path}?filters`
    pub async fn list(&self, filters: &ListFilters) -> ClientResult<Paginated<R::Entity>> {
        let path = format!("{}{}", R::PATH, filters.to_query_string());
        tracing::debug!(resource = R::PATH, path = %path, "list");
        self.http.get(&path).await
    }

    /// GET `{path}/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<R::Entity> {
        let envelope: DataEnvelope<R::Entity> = self.http.get(&endpoints::item(R::PATH, id)).await?;
        Ok(envelope.into_inner())
    }

    /// POST `{path}`
    pub async fn create(&self, data: &R::Create) -> ClientResult<R::Entity> {
        tracing::debug!(resource = R::PATH, payload = ?data, "create");
        let envelope: DataEnvelope<R::Entity> = self.http.post(R::PATH, data).await?;
        Ok(envelope.into_inner())
    }

    /// PUT `{path}/{id}`
    pub async fn update(&self, id: i64, data: &R::Update) -> ClientResult<R::Entity> {
        tracing::debug!(resource = R::PATH, id, payload = ?data, "update");
        let envelope: DataEnvelope<R::Entity> =
            self.http.put(&endpoints::item(R::PATH, id), data).await?;
        Ok(envelope.into_inner())
    }

    /// DELETE `{path}/{id}` (soft delete on the backend)
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        tracing::debug!(resource = R::PATH, id, "delete");
        self.http.delete(&endpoints::item(R::PATH, id)).await
    }

    /// PUT `{path}/{id}/enable`
    pub async fn enable(&self, id: i64) -> ClientResult<()> {
        self.toggle(id, true).await
    }

    /// PUT `{path}/{id}/disable`
    pub async fn disable(&self, id: i64) -> ClientResult<()> {
        self.toggle(id, false).await
    }

    async fn toggle(&self, id: i64, enable: bool) -> ClientResult<()> {
        if !R::TOGGLEABLE {
            return Err(ClientError::NotSupported(format!(
                "{} has no enable/disable endpoint",
                R::PATH
            )));
        }
        tracing::debug!(resource = R::PATH, id, enable, "toggle");
        self.http.put_empty(&endpoints::toggle(R::PATH, id, enable)).await
    }
}
