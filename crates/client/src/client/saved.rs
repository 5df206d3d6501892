//! Saved search and alert methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, SavedSearch, SavedSearchCreateParams};

impl SplunkClient {
    /// List all saved searches.
    pub async fn list_saved_searches(&self) -> Result<Vec<SavedSearch>> {
        endpoints::list_saved_searches(&self.http, &self.base_url, self.auth_token()).await
    }

    /// Create a saved search.
    pub async fn create_saved_search(&self, params: &SavedSearchCreateParams) -> Result<()> {
        endpoints::create_saved_search(&self.http, &self.base_url, self.auth_token(), params).await
    }

    /// List scheduled alerts.
    pub async fn list_alerts(&self) -> Result<Vec<Alert>> {
        endpoints::list_alerts(&self.http, &self.base_url, self.auth_token()).await
    }
}
