//! Stream URL probing

use std::time::Duration;

use tracing::debug;

use crate::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Check that a stream URL answers a HEAD request with a status below 400
pub fn url_exists(url: &str) -> Result<bool> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()?;
    let resp = client.head(url).send()?;
    let status = resp.status();
    debug!("HEAD {} -> {}", url, status);
    Ok(status.as_u16() < 400)
}
