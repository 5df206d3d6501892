//! Event submission through the management port's simple receiver.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::EventPayload;

/// Send one event.
pub async fn send_event(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    payload: &EventPayload,
) -> Result<()> {
    debug!(
        index = payload.index.as_deref().unwrap_or(""),
        "Sending event"
    );

    let url = format!("{}/services/receivers/simple", base_url);

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("output_mode", "json")])
        .json(payload);
    send_request(builder, "/services/receivers/simple", "POST").await?;

    Ok(())
}
