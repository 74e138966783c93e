use super::mock_data::{MockDataSource, MockDataset};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// The admin operations the dashboard relies on.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_all_products(&self) -> anyhow::Result<Vec<Value>>;

    async fn get_all_orders(&self) -> anyhow::Result<Vec<Value>>;

    async fn get_all_users(&self) -> anyhow::Result<Vec<Value>>;

    async fn get_dashboard_stats(&self) -> anyhow::Result<Value>;
}

/// The API client module. It may or may not expose an admin API.
#[derive(Clone, Default)]
pub struct ApiClient {
    admin_api: Option<Arc<dyn AdminApi>>,
}

impl ApiClient {
    pub fn new(admin_api: impl AdminApi + 'static) -> Self {
        Self {
            admin_api: Some(Arc::new(admin_api)),
        }
    }

    pub fn without_admin_api() -> Self {
        Self::default()
    }

    pub fn admin_api(&self) -> Option<&dyn AdminApi> {
        self.admin_api.as_deref()
    }
}

/// Answers admin calls out of the mock catalogue.
pub struct MockAdminApi {
    source: Arc<dyn MockDataSource>,
}

impl MockAdminApi {
    pub fn new(source: Arc<dyn MockDataSource>) -> Self {
        Self { source }
    }

    async fn list(&self, pick: fn(MockDataset) -> Option<Value>) -> anyhow::Result<Vec<Value>> {
        match pick(self.source.load().await?) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(anyhow::anyhow!("Expected a list, got {other}")),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn get_all_products(&self) -> anyhow::Result<Vec<Value>> {
        self.list(|d| d.mock_products).await
    }

    async fn get_all_orders(&self) -> anyhow::Result<Vec<Value>> {
        self.list(|d| d.mock_orders).await
    }

    async fn get_all_users(&self) -> anyhow::Result<Vec<Value>> {
        self.list(|d| d.mock_users).await
    }

    async fn get_dashboard_stats(&self) -> anyhow::Result<Value> {
        self.source
            .load()
            .await?
            .mock_stats
            .ok_or_else(|| anyhow::anyhow!("The mock catalogue has no dashboard stats"))
    }
}

/// Client of a live admin backend.
pub struct HttpAdminApi {
    client: Client,
    base_url: Url,
}

impl HttpAdminApi {
    /// Endpoint paths are resolved below `base_url`, path prefix included.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Failed to build the URL for {path}"))?;

        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to call {path}"))?
            .error_for_status()
            .with_context(|| format!("{path} answered with an error"))?
            .json()
            .await
            .with_context(|| format!("{path} returned an unexpected body"))
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn get_all_products(&self) -> anyhow::Result<Vec<Value>> {
        self.get("admin/products").await
    }

    async fn get_all_orders(&self) -> anyhow::Result<Vec<Value>> {
        self.get("admin/orders").await
    }

    async fn get_all_users(&self) -> anyhow::Result<Vec<Value>> {
        self.get("admin/users").await
    }

    async fn get_dashboard_stats(&self) -> anyhow::Result<Value> {
        self.get("admin/dashboard/stats").await
    }
}
