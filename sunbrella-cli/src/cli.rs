use std::{collections::HashSet, time::Duration};

use anyhow::Context;
use clap::{
    Parser,
    builder::{PossibleValuesParser, TypedValueParser},
};
use sunbrella_core::{
    Check, Config, IfconfigLocator, OpenWeatherForecaster, SunbrellaError, advise,
};

const ABOUT: &str = "Gets weather info for your location and tells you whether to \
wear sunblock or take an umbrella.";

const LONG_ABOUT: &str = "Gets weather info for your location and tells you whether to \
wear sunblock or take an umbrella.

Requires an openweathermap API key in the API_KEY environment variable and \
relies on ifconfig.co for geoip.

Also assumes your timezone is configured according to your region.

Exits 0 when an advisory was printed and 1 when none applies.";

/// Exit code for errors that did not come from the core library.
pub const EXIT_INTERNAL: u8 = 70;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sunbrella", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Which check to run; repeat to run both.
    #[arg(long = "weather", value_name = "CHECK", required = true, value_parser = check_parser())]
    pub weather: Vec<Check>,

    /// Per-request timeout for the geoip and weather lookups, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

fn check_parser() -> impl TypedValueParser<Value = Check> {
    PossibleValuesParser::new(["shine", "rain"]).try_map(|s| Check::try_from(s.as_str()))
}

impl Cli {
    /// Checks requested on the command line, duplicates collapsed.
    pub fn checks(&self) -> HashSet<Check> {
        self.weather.iter().copied().collect()
    }

    /// Run the lookups and print advisories. Returns whether any fired.
    pub async fn run(self) -> anyhow::Result<bool> {
        let config = Config::from_env()?.with_timeout(Duration::from_secs(self.timeout));
        tracing::debug!(?config, checks = ?self.weather, "starting");

        let http = config.http_client()?;
        let locator = IfconfigLocator::from_config(&config, http.clone());
        let forecaster = OpenWeatherForecaster::from_config(&config, http);

        let verdict = advise(&locator, &forecaster, &self.checks())
            .await
            .context("could not check today's weather")?;

        for advisory in &verdict.advisories {
            println!("{advisory}");
        }

        Ok(verdict.should_act)
    }
}

/// Map a failed run to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SunbrellaError>()
        .map(SunbrellaError::exit_code)
        .unwrap_or(EXIT_INTERNAL)
}
