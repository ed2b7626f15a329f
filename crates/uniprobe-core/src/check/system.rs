// Site-level system status check.

use uniprobe_api::SiteClient;
use uniprobe_api::models::RawSysInfo;

use crate::config::{CheckConfig, Credentials};
use crate::error::CheckError;
use crate::model::{SysInfoRow, SystemMetrics};
use crate::outcome::CheckOutcome;
use crate::provider::{SessionProvider, SessionState};

/// Poll controller-level status for the configured site.
///
/// Everything here is direct field copying; the interesting logic lives in
/// the session provider.
pub async fn check_system(
    provider: &SessionProvider,
    config: &CheckConfig,
    credentials: &Credentials,
) -> CheckOutcome<SystemMetrics> {
    run(provider, config, credentials)
        .await
        .unwrap_or_else(CheckOutcome::Failed)
}

async fn run(
    provider: &SessionProvider,
    config: &CheckConfig,
    credentials: &Credentials,
) -> Result<CheckOutcome<SystemMetrics>, CheckError> {
    let cached = match provider.get_session(config, credentials).await? {
        SessionState::Ready(cached) => cached,
        SessionState::Unconfigured(reason) => return Ok(CheckOutcome::Skipped(reason)),
    };

    let client = SiteClient::new(cached.session, cached.kind, config.site.clone());
    let info = client.sysinfo().await?;
    if info.is_empty() {
        return Err(CheckError::Api {
            message: "empty sysinfo response".into(),
        });
    }

    let rows = info.iter().map(sysinfo_row).collect();
    Ok(CheckOutcome::Complete(SystemMetrics { sysinfo: rows }))
}

fn sysinfo_row(raw: &RawSysInfo) -> SysInfoRow {
    SysInfoRow {
        name: raw
            .name
            .clone()
            .or_else(|| raw.hostname.clone())
            .unwrap_or_else(|| "sysinfo".into()),
        hostname: raw.hostname.clone(),
        version: raw.version.clone(),
        previous_version: raw.previous_version.clone(),
        build: raw.build.clone(),
        update_available: raw.update_available,
        update_downloaded: raw.update_downloaded,
        uptime: raw.uptime,
        timezone: raw.timezone.clone(),
        autobackup: raw.autobackup,
        data_retention_days: raw.data_retention_days,
    }
}
