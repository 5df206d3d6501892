//! Server information endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::{extract_entry_content, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::ServerInfo;

/// Get server information.
pub async fn get_server_info(client: &Client, base_url: &str, auth_token: &str) -> Result<ServerInfo> {
    debug!("Getting server info");

    let url = format!("{}/services/server/info", base_url);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("output_mode", "json")]);
    let response = send_request(builder, "/services/server/info", "GET").await?;
    let resp = read_json(response).await?;

    match extract_entry_content(&resp) {
        Ok(Value::Object(fields)) => Ok(ServerInfo::new(fields.clone())),
        Ok(_) => Err(ClientError::Decode(
            "server info content is not an object".to_string(),
        )),
        Err(_) => Err(ClientError::Decode("no server info found".to_string())),
    }
}
