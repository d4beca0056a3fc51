//! Best-effort country flag lookup for the "from <flag>" decoration.
use crate::config::GeolocationConfig;
use crate::error::AdapterError;
use gloo_net::http::Request;
use leptos::logging::{error, log};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct GeolocationResponse {
    country_flag: Option<String>,
}

/// Reads the flag image URL out of a geolocation response body.
pub fn parse_flag_response(body: &str) -> Result<Option<String>, AdapterError> {
    let response: GeolocationResponse = serde_json::from_str(body)?;
    Ok(response.country_flag.filter(|flag| !flag.trim().is_empty()))
}

/// Looks up the visitor's country flag. Any failure is logged and yields
/// `None`; the lookup is never retried.
pub async fn fetch_country_flag(config: &GeolocationConfig) -> Option<String> {
    let Some(url) = config.request_url() else {
        log!("[GEO] No API key configured, skipping flag lookup");
        return None;
    };

    match request_flag(&url).await {
        Ok(flag) => {
            log!("[GEO] Flag lookup returned {}", flag.as_deref().unwrap_or("nothing"));
            flag
        }
        Err(err) => {
            error!("[GEO] Flag lookup failed: {}", err);
            None
        }
    }
}

async fn request_flag(url: &str) -> Result<Option<String>, AdapterError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AdapterError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(AdapterError::Network(format!("HTTP {}", response.status())));
    }
    let body = response
        .text()
        .await
        .map_err(|e| AdapterError::Network(e.to_string()))?;
    parse_flag_response(&body)
}
