use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Debug;

use crate::{
    config::Config,
    error::{Result, Service, SunbrellaError},
    http::fetch_body,
    model::Location,
};

/// Resolves where the caller is.
#[async_trait]
pub trait Locator: Send + Sync + Debug {
    async fn get_location(&self) -> Result<Location>;
}

/// Geolocation through ifconfig.co's JSON endpoint.
#[derive(Debug, Clone)]
pub struct IfconfigLocator {
    url: String,
    http: Client,
}

impl IfconfigLocator {
    pub fn new(url: impl Into<String>, http: Client) -> Self {
        Self { url: url.into(), http }
    }

    pub fn from_config(config: &Config, http: Client) -> Self {
        Self::new(config.geoip_url.clone(), http)
    }
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    longitude: f64,
    latitude: f64,
    city: Option<String>,
    country: Option<String>,
}

#[async_trait]
impl Locator for IfconfigLocator {
    async fn get_location(&self) -> Result<Location> {
        let body = fetch_body(Service::GeoIp, self.http.get(&self.url)).await?;
        parse_location(&body)
    }
}

fn parse_location(body: &str) -> Result<Location> {
    let value: Value = serde_json::from_str(body).map_err(SunbrellaError::LocationLookup)?;
    let parsed: GeoIpResponse =
        serde_json::from_value(value).map_err(SunbrellaError::MalformedLocationData)?;

    tracing::info!(
        latitude = parsed.latitude,
        longitude = parsed.longitude,
        city = parsed.city.as_deref().unwrap_or("unknown"),
        country = parsed.country.as_deref().unwrap_or("unknown"),
        "resolved location"
    );

    Ok(Location {
        longitude: parsed.longitude,
        latitude: parsed.latitude,
    })
}
