//! Server info and event submission methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{EventPayload, ServerInfo};

impl SplunkClient {
    /// Get server information.
    pub async fn server_info(&self) -> Result<ServerInfo> {
        endpoints::get_server_info(&self.http, &self.base_url, self.auth_token()).await
    }

    /// Send one event to the simple receiver.
    pub async fn send_event(&self, payload: &EventPayload) -> Result<()> {
        endpoints::send_event(&self.http, &self.base_url, self.auth_token(), payload).await
    }
}
