// src/core/net.rs

// One blocking GET, no retry. Anything but a 2xx is a connection failure.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::connection(url, e))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| Error::connection(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::connection(url, format!("HTTP {status}")));
    }

    let body = resp.text().map_err(|e| Error::connection(url, e))?;
    logd!("Net: GET {} → {} ({} bytes)", url, status, body.len());
    Ok(body)
}
