use reqwest::RequestBuilder;

use crate::error::{Result, Service, SunbrellaError, truncate_body};

/// Send `request` once and return the response body.
///
/// Only transport failures are errors here. A non-success status is logged and
/// the body still goes back to the caller, whose parse decides which lookup
/// error (if any) applies.
pub(crate) async fn fetch_body(service: Service, request: RequestBuilder) -> Result<String> {
    let res = request
        .send()
        .await
        .map_err(|source| SunbrellaError::Transport { service, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| SunbrellaError::Transport { service, source })?;

    if status.is_success() {
        tracing::debug!(%service, %status, bytes = body.len(), "upstream responded");
    } else {
        tracing::warn!(
            %service,
            %status,
            body = %truncate_body(&body),
            "upstream replied with an error status"
        );
    }

    Ok(body)
}
