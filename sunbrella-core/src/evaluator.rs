use std::collections::HashSet;

use crate::model::{Check, Verdict, WeatherConditions};

/// UV index at or above which sunblock is advised.
pub const UV_INDEX_THRESHOLD: f64 = 3.0;

/// Precipitation probability at or above which an umbrella is advised.
///
/// Compared as-is against the upstream `pop`, which is a 0.0–1.0 fraction, so
/// real forecasts never reach it.
pub const PRECIP_PROB_THRESHOLD: f64 = 5.0;

/// Compare today's conditions against the thresholds for the requested checks.
pub fn evaluate(conditions: WeatherConditions, requested: &HashSet<Check>) -> Verdict {
    let mut verdict = Verdict::default();

    if conditions.uvi >= UV_INDEX_THRESHOLD && requested.contains(&Check::Shine) {
        verdict
            .advisories
            .push(format!("Expected UV index: {}", conditions.uvi));
        verdict.should_act = true;
    }

    if conditions.precip_prob >= PRECIP_PROB_THRESHOLD && requested.contains(&Check::Rain) {
        verdict.advisories.push(format!(
            "Expected precipitation probability {}",
            conditions.precip_prob
        ));
        verdict.should_act = true;
    }

    verdict
}
