//! External modules the harness probes but does not own.
mod admin_api;
mod mock_data;

pub use admin_api::{AdminApi, ApiClient, HttpAdminApi, MockAdminApi};
pub use mock_data::{
    is_structured, ExportKind, JsonFileMockData, MockDataSource, MockDataset, MockExport,
    StaticMockData,
};

use std::sync::Arc;

/// Everything a test run needs besides storage.
#[derive(Clone)]
pub struct Collaborators {
    pub mock_data: Arc<dyn MockDataSource>,
    pub api_client: ApiClient,
}

impl Collaborators {
    pub fn new(mock_data: Arc<dyn MockDataSource>, api_client: ApiClient) -> Self {
        Self {
            mock_data,
            api_client,
        }
    }

    /// A mock catalogue with an admin API answering out of it.
    pub fn mocked(mock_data: Arc<dyn MockDataSource>) -> Self {
        let api_client = ApiClient::new(MockAdminApi::new(Arc::clone(&mock_data)));
        Self::new(mock_data, api_client)
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::mocked(Arc::new(StaticMockData::default()))
    }
}
