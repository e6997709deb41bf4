use std::collections::HashSet;

use crate::{
    error::Result,
    evaluator::evaluate,
    forecaster::Forecaster,
    locator::Locator,
    model::{Check, Verdict},
};

/// Locate, fetch today's forecast, and evaluate it. One attempt per lookup;
/// the first error ends the run.
pub async fn advise(
    locator: &dyn Locator,
    forecaster: &dyn Forecaster,
    requested: &HashSet<Check>,
) -> Result<Verdict> {
    let location = locator.get_location().await?;
    let conditions = forecaster.get_forecast(&location).await?;
    let verdict = evaluate(conditions, requested);

    tracing::debug!(
        fired = verdict.advisories.len(),
        should_act = verdict.should_act,
        "evaluated conditions"
    );
    Ok(verdict)
}
