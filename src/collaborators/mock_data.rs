use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

/// The container kind an export is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Array,
    Object,
}

/// A named export of the dataset, as seen by the shape checks.
#[derive(Debug, Clone, Copy)]
pub struct MockExport<'a> {
    pub name: &'static str,
    pub kind: ExportKind,
    pub value: Option<&'a Value>,
}

/// The mock catalogue the dashboard renders while no backend is wired in.
///
/// Exports are kept as raw JSON so that their shape can be checked at run time.
/// A `null` export is indistinguishable from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_stats: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_products: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_orders: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_users: Option<Value>,
}

impl MockDataset {
    pub fn exports(&self) -> [MockExport<'_>; 4] {
        [
            MockExport {
                name: "mockStats",
                kind: ExportKind::Object,
                value: self.mock_stats.as_ref(),
            },
            MockExport {
                name: "mockProducts",
                kind: ExportKind::Array,
                value: self.mock_products.as_ref(),
            },
            MockExport {
                name: "mockOrders",
                kind: ExportKind::Array,
                value: self.mock_orders.as_ref(),
            },
            MockExport {
                name: "mockUsers",
                kind: ExportKind::Array,
                value: self.mock_users.as_ref(),
            },
        ]
    }

    /// Built-in catalogue of a small apparel shop.
    pub fn sample() -> Self {
        Self {
            mock_stats: Some(json!({
                "totalRevenue": 15420.5,
                "totalOrders": 156,
                "totalProducts": 48,
                "totalUsers": 89,
                "revenueGrowth": 12.5,
                "ordersGrowth": 8.2
            })),
            mock_products: Some(json!([
                {"id": 1, "name": "Classic T-Shirt", "category": "t-shirts", "price": 24.99, "stock": 150, "status": "active"},
                {"id": 2, "name": "Premium Hoodie", "category": "hoodies", "price": 59.99, "stock": 75, "status": "active"},
                {"id": 3, "name": "Custom Cap", "category": "accessories", "price": 19.99, "stock": 0, "status": "out_of_stock"}
            ])),
            mock_orders: Some(json!([
                {"id": "ORD-001", "customer": "John Doe", "total": 84.98, "status": "delivered", "items": 2},
                {"id": "ORD-002", "customer": "Jane Smith", "total": 59.99, "status": "processing", "items": 1}
            ])),
            mock_users: Some(json!([
                {"id": 1, "firstName": "Admin", "lastName": "User", "email": "admin@customwear.com", "role": "admin", "status": "active"},
                {"id": 2, "firstName": "John", "lastName": "Doe", "email": "john@example.com", "role": "customer", "status": "active"}
            ])),
        }
    }
}

/// Non-null and not a primitive: objects and arrays both qualify.
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Where the dashboard's mock catalogue comes from.
#[async_trait]
pub trait MockDataSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<MockDataset>;
}

/// A dataset held in memory.
#[derive(Debug, Clone)]
pub struct StaticMockData(MockDataset);

impl StaticMockData {
    pub fn new(dataset: MockDataset) -> Self {
        Self(dataset)
    }
}

impl Default for StaticMockData {
    fn default() -> Self {
        Self(MockDataset::sample())
    }
}

#[async_trait]
impl MockDataSource for StaticMockData {
    async fn load(&self) -> anyhow::Result<MockDataset> {
        Ok(self.0.clone())
    }
}

/// A dataset read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileMockData {
    path: PathBuf,
}

impl JsonFileMockData {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MockDataSource for JsonFileMockData {
    async fn load(&self) -> anyhow::Result<MockDataset> {
        tracing::debug!(path = %self.path.display(), "Loading mock data");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read mock data from {}", self.path.display()))?;
        serde_json::from_str(&raw).context("Mock data is not a valid dataset")
    }
}
