// Per-device status check.

use tracing::warn;

use uniprobe_api::SiteClient;

use crate::config::{CheckConfig, Credentials};
use crate::error::CheckError;
use crate::model::DeviceMetrics;
use crate::normalize::normalize_device;
use crate::outcome::{CheckOutcome, SkipReason};
use crate::provider::{SessionProvider, SessionState};

/// Poll one device and normalize its snapshot into metric tables.
///
/// A missing or placeholder MAC withdraws the check; an empty device data
/// set is a fatal not-found; anomalies found during normalization downgrade
/// the result to `Partial` without discarding the data.
pub async fn check_device(
    provider: &SessionProvider,
    config: &CheckConfig,
    credentials: &Credentials,
) -> CheckOutcome<DeviceMetrics> {
    run(provider, config, credentials)
        .await
        .unwrap_or_else(CheckOutcome::Failed)
}

async fn run(
    provider: &SessionProvider,
    config: &CheckConfig,
    credentials: &Credentials,
) -> Result<CheckOutcome<DeviceMetrics>, CheckError> {
    let Some(mac) = config.mac.as_deref().filter(|m| !m.is_empty()) else {
        warn!("missing mac address, withdrawing device check");
        return Ok(CheckOutcome::Skipped(SkipReason::MacMissing));
    };
    if mac.starts_with('?') {
        warn!(mac, "placeholder mac address, withdrawing device check");
        return Ok(CheckOutcome::Skipped(SkipReason::MacPlaceholder));
    }

    let cached = match provider.get_session(config, credentials).await? {
        SessionState::Ready(cached) => cached,
        SessionState::Unconfigured(reason) => return Ok(CheckOutcome::Skipped(reason)),
    };

    let client = SiteClient::new(cached.session, cached.kind, config.site.clone());
    let devices = client.device_snapshot(mac).await?;
    let Some(raw) = devices.into_iter().next() else {
        return Err(CheckError::DeviceNotFound {
            identifier: mac.to_owned(),
        });
    };

    let (metrics, diagnostics) = normalize_device(&raw);
    Ok(if diagnostics.is_empty() {
        CheckOutcome::Complete(metrics)
    } else {
        CheckOutcome::Partial(metrics, diagnostics)
    })
}
