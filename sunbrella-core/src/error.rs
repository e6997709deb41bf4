use thiserror::Error;

/// Upstream service an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    GeoIp,
    Weather,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::GeoIp => "GEOIP",
            Service::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way a run can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum SunbrellaError {
    #[error("API_KEY is not set in the environment (an openweathermap API key is required)")]
    Configuration,

    #[error("could not initialise the HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("GEOIP lookup returned invalid data")]
    LocationLookup(#[source] serde_json::Error),

    #[error("GEOIP lookup did not return coordinates")]
    MalformedLocationData(#[source] serde_json::Error),

    #[error("weather lookup returned malformed data")]
    ForecastLookup(#[source] serde_json::Error),

    #[error("could not find today's forecast")]
    ForecastDayNotFound,

    #[error("weather lookup did not return weather data")]
    ForecastDataMissing,

    #[error("{service} lookup failed")]
    Transport {
        service: Service,
        #[source]
        source: reqwest::Error,
    },
}

impl SunbrellaError {
    /// Upstream service this error concerns, if any.
    pub fn service(&self) -> Option<Service> {
        match self {
            SunbrellaError::Configuration | SunbrellaError::HttpClient(_) => None,
            SunbrellaError::LocationLookup(_) | SunbrellaError::MalformedLocationData(_) => {
                Some(Service::GeoIp)
            }
            SunbrellaError::ForecastLookup(_)
            | SunbrellaError::ForecastDayNotFound
            | SunbrellaError::ForecastDataMissing => Some(Service::Weather),
            SunbrellaError::Transport { service, .. } => Some(*service),
        }
    }

    /// Process exit code for this error.
    ///
    /// `0` and `1` are reserved for "advisory fired" / "nothing fired" and `2`
    /// is the argument parser's usage error. Local setup problems are `3`.
    pub fn exit_code(&self) -> u8 {
        match self.service() {
            None => 3,
            Some(Service::GeoIp) => 4,
            Some(Service::Weather) => 5,
        }
    }
}

pub type Result<T, E = SunbrellaError> = std::result::Result<T, E>;

/// Shorten an upstream body so log lines stay on one screen.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
