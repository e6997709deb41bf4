use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Debug;

use crate::{
    config::Config,
    error::{Result, Service, SunbrellaError},
    http::fetch_body,
    model::{Location, WeatherConditions},
};

/// Forecast sections the one-call API should leave out; only `daily` is used.
const EXCLUDED_SECTIONS: &str = "current,minutely,hourly,alerts";

/// Fetches today's conditions for a location.
#[async_trait]
pub trait Forecaster: Send + Sync + Debug {
    async fn get_forecast(&self, location: &Location) -> Result<WeatherConditions>;
}

/// Forecasts from the openweathermap one-call API.
#[derive(Clone)]
pub struct OpenWeatherForecaster {
    url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherForecaster {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, http: Client) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            http,
        }
    }

    pub fn from_config(config: &Config, http: Client) -> Self {
        Self::new(config.onecall_url.clone(), config.api_key.clone(), http)
    }
}

impl Debug for OpenWeatherForecaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherForecaster")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    daily: Vec<DailyEntry>,
}

/// One element of the `daily` array, kept untyped so that only the fields of
/// entries the scan actually reaches have to be present and numeric.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub(crate) struct DailyEntry(Value);

impl DailyEntry {
    /// Sunrise as unix seconds; fractional timestamps are floored.
    fn sunrise(&self) -> Option<i64> {
        let value = self.0.get("sunrise")?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|secs| secs.floor() as i64))
    }

    fn uvi(&self) -> Option<f64> {
        self.0.get("uvi")?.as_f64()
    }

    fn pop(&self) -> Option<f64> {
        self.0.get("pop")?.as_f64()
    }
}

#[async_trait]
impl Forecaster for OpenWeatherForecaster {
    async fn get_forecast(&self, location: &Location) -> Result<WeatherConditions> {
        let request = self.http.get(&self.url).query(&[
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("exclude", EXCLUDED_SECTIONS.to_string()),
            ("appid", self.api_key.clone()),
        ]);

        let body = fetch_body(Service::Weather, request).await?;
        let daily = parse_daily(&body)?;
        tracing::debug!(days = daily.len(), "received daily forecast");

        let conditions = todays_conditions(&daily, &Local::now())?;
        tracing::info!(
            uvi = conditions.uvi,
            pop = conditions.precip_prob,
            "found today's forecast"
        );
        Ok(conditions)
    }
}

fn parse_daily(body: &str) -> Result<Vec<DailyEntry>> {
    let value: Value = serde_json::from_str(body).map_err(SunbrellaError::ForecastLookup)?;
    let parsed: OneCallResponse = serde_json::from_value(value).map_err(|err| {
        tracing::debug!(error = %err, "unexpected one-call payload");
        SunbrellaError::ForecastDataMissing
    })?;
    Ok(parsed.daily)
}

/// Pick the first entry whose sunrise falls on `now`'s calendar date in
/// `now`'s timezone.
///
/// Entries are scanned in order and only up to the match: a missing `sunrise`
/// before that point, or a missing `uvi`/`pop` on the match, is
/// [`SunbrellaError::ForecastDataMissing`]. Entries after the match are never
/// read.
pub(crate) fn todays_conditions<Tz: TimeZone>(
    daily: &[DailyEntry],
    now: &DateTime<Tz>,
) -> Result<WeatherConditions> {
    let today = now.date_naive();
    let tz = now.timezone();

    for day in daily {
        let sunrise = day.sunrise().ok_or(SunbrellaError::ForecastDataMissing)?;
        if !is_on_date(sunrise, &tz, today) {
            continue;
        }

        return match (day.uvi(), day.pop()) {
            (Some(uvi), Some(pop)) => Ok(WeatherConditions {
                uvi,
                precip_prob: pop,
            }),
            _ => Err(SunbrellaError::ForecastDataMissing),
        };
    }

    Err(SunbrellaError::ForecastDayNotFound)
}

/// Whether a unix timestamp (seconds, UTC) lands on `date` in `tz`.
fn is_on_date<Tz: TimeZone>(unix_ts: i64, tz: &Tz, date: NaiveDate) -> bool {
    DateTime::from_timestamp(unix_ts, 0)
        .map(|utc| utc.with_timezone(tz).date_naive() == date)
        .unwrap_or(false)
}
