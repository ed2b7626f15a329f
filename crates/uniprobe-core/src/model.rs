// ── Metric-row model ──
//
// Flat, typed rows the monitoring pipeline consumes. Every row is built
// fresh per poll cycle from the raw snapshot and discarded after the result
// is handed off. `None` always means "not reported by the controller" --
// never zero.

use serde::Serialize;
use strum::Display;

/// Device state, mapped from the controller's integer code.
///
/// Unknown codes map to an absent state, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum DeviceState {
    #[serde(rename = "offline")]
    #[strum(serialize = "offline")]
    Offline,
    #[serde(rename = "connected")]
    #[strum(serialize = "connected")]
    Connected,
    #[serde(rename = "pending adoption")]
    #[strum(serialize = "pending adoption")]
    PendingAdoption,
    #[serde(rename = "updating")]
    #[strum(serialize = "updating")]
    Updating,
    #[serde(rename = "provisioning")]
    #[strum(serialize = "provisioning")]
    Provisioning,
    #[serde(rename = "unreachable")]
    #[strum(serialize = "unreachable")]
    Unreachable,
    #[serde(rename = "adopting")]
    #[strum(serialize = "adopting")]
    Adopting,
    #[serde(rename = "deleting")]
    #[strum(serialize = "deleting")]
    Deleting,
    #[serde(rename = "adoption error")]
    #[strum(serialize = "adoption error")]
    AdoptionError,
    #[serde(rename = "adoption failed")]
    #[strum(serialize = "adoption failed")]
    AdoptionFailed,
    #[serde(rename = "isolated")]
    #[strum(serialize = "isolated")]
    Isolated,
}

impl DeviceState {
    /// Map the controller's integer state code; unknown codes are absent.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Offline),
            1 => Some(Self::Connected),
            2 => Some(Self::PendingAdoption),
            4 => Some(Self::Updating),
            5 => Some(Self::Provisioning),
            6 => Some(Self::Unreachable),
            7 => Some(Self::Adopting),
            8 => Some(Self::Deleting),
            9 => Some(Self::AdoptionError),
            10 => Some(Self::AdoptionFailed),
            11 => Some(Self::Isolated),
            _ => None,
        }
    }
}

/// The device row itself -- always exactly one per snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRow {
    pub name: String,
    pub mac: Option<String>,
    pub state: Option<DeviceState>,
    pub adopted: Option<bool>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub model: Option<String>,
    pub num_sta: Option<i64>,
    pub ip: Option<String>,
    pub isolated: Option<bool>,
    /// Name of the uplink, referencing the uplink table.
    pub uplink: Option<String>,
    pub version: Option<String>,
    pub uptime: Option<i64>,
    pub cpu: Option<f64>,
    pub mem: Option<f64>,
    pub satisfaction: Option<i64>,
    pub total_used_power: Option<f64>,
    pub config_network_type: Option<String>,
    pub bonding_enabled: Option<bool>,
    pub kernel_version: Option<String>,
    pub serial: Option<String>,
    pub license_state: Option<String>,
}

/// One physical radio, combining direct fields with counters from the
/// per-radio statistics map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioRow {
    pub name: String,
    pub cu_self_rx: Option<i64>,
    pub cu_self_tx: Option<i64>,
    pub cu_total: Option<i64>,
    pub num_sta: Option<i64>,
    pub radio: Option<String>,
    pub satisfaction: Option<i64>,
    pub mac_filter_rejections: Option<i64>,
    pub rx_bytes: Option<i64>,
    pub rx_crypts: Option<i64>,
    pub rx_dropped: Option<i64>,
    pub rx_errors: Option<i64>,
    pub rx_frags: Option<i64>,
    pub tx_bytes: Option<i64>,
    pub tx_dropped: Option<i64>,
    pub tx_errors: Option<i64>,
    pub tx_packets: Option<i64>,
    pub tx_power: Option<i64>,
    pub tx_retries: Option<i64>,
}

/// One virtual access point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VapRow {
    pub name: String,
    pub bssid: Option<String>,
    pub channel: Option<i64>,
    pub essid: Option<String>,
    pub extchannel: Option<i64>,
    pub num_sta: Option<i64>,
    /// References a radio row by name.
    pub radio_name: Option<String>,
    pub rx_bytes: Option<i64>,
    pub rx_crypts: Option<i64>,
    pub rx_dropped: Option<i64>,
    pub rx_errors: Option<i64>,
    pub rx_frags: Option<i64>,
    pub tx_bytes: Option<i64>,
    pub tx_dropped: Option<i64>,
    pub tx_errors: Option<i64>,
    pub tx_power: Option<i64>,
    pub satisfaction: Option<i64>,
}

/// The device's uplink. Wired-only metrics are optional because the uplink
/// can be wireless.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UplinkRow {
    pub name: String,
    pub full_duplex: Option<bool>,
    pub ip: Option<String>,
    pub mac: Option<String>,
    pub max_speed: Option<i64>,
    pub netmask: Option<String>,
    pub num_port: Option<i64>,
    pub port_idx: Option<i64>,
    pub rx_bytes: Option<i64>,
    pub rx_dropped: Option<i64>,
    pub rx_errors: Option<i64>,
    pub rx_multicast: Option<i64>,
    pub rx_packets: Option<i64>,
    pub speed: Option<i64>,
    pub tx_bytes: Option<i64>,
    pub tx_dropped: Option<i64>,
    pub tx_errors: Option<i64>,
    pub tx_packets: Option<i64>,
    /// `"wire"` or `"wireless"`.
    #[serde(rename = "type")]
    pub uplink_type: Option<String>,
    pub uplink_device_name: Option<String>,
    pub uplink_mac: Option<String>,
    pub uplink_remote_port: Option<i64>,
    pub uplink_source: Option<String>,
}

/// One switch port with wired-link, PoE, and spanning-tree metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortRow {
    pub name: String,
    pub port_idx: Option<i64>,
    pub poe_caps: Option<i64>,
    pub poe_mode: Option<String>,
    pub port_poe: Option<bool>,
    pub poe_good: Option<bool>,
    pub poe_power: Option<f64>,
    pub media: Option<String>,
    pub op_mode: Option<String>,
    pub autoneg: Option<bool>,
    pub speed_caps: Option<i64>,
    pub forward: Option<String>,
    pub enable: Option<bool>,
    pub full_duplex: Option<bool>,
    pub is_uplink: Option<bool>,
    pub up: Option<bool>,
    pub masked: Option<bool>,
    pub flowctrl_rx: Option<bool>,
    pub flowctrl_tx: Option<bool>,
    pub jumbo: Option<bool>,
    pub speed: Option<i64>,
    pub stp_pathcost: Option<i64>,
    pub stp_state: Option<String>,
    pub satisfaction: Option<i64>,
    pub rx_broadcast: Option<i64>,
    pub rx_bytes: Option<i64>,
    pub rx_dropped: Option<i64>,
    pub rx_errors: Option<i64>,
    pub rx_multicast: Option<i64>,
    pub rx_packets: Option<i64>,
    pub tx_broadcast: Option<i64>,
    pub tx_bytes: Option<i64>,
    pub tx_dropped: Option<i64>,
    pub tx_errors: Option<i64>,
    pub tx_multicast: Option<i64>,
    pub tx_packets: Option<i64>,
}

/// A client MAC observed on a port. Keyed by the MAC itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacRow {
    /// The MAC address.
    pub name: String,
    /// References a port row by name.
    pub port_name: String,
    pub age: Option<i64>,
    pub ip: Option<String>,
    pub uptime: Option<i64>,
    pub vlan: Option<i64>,
    #[serde(rename = "static")]
    pub is_static: Option<bool>,
}

/// All metric tables produced from one device snapshot.
///
/// A table is `Some` exactly when the corresponding section was present in
/// the raw snapshot, so "section absent" and "section present but empty"
/// stay distinguishable downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceMetrics {
    pub device: Vec<DeviceRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<Vec<RadioRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vap: Option<Vec<VapRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplink: Option<Vec<UplinkRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Vec<PortRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<Vec<MacRow>>,
}

/// Controller-level status row from `stat/sysinfo`. Direct field copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SysInfoRow {
    pub name: String,
    pub hostname: Option<String>,
    pub version: Option<String>,
    pub previous_version: Option<String>,
    pub build: Option<String>,
    pub update_available: Option<bool>,
    pub update_downloaded: Option<bool>,
    pub uptime: Option<i64>,
    pub timezone: Option<String>,
    pub autobackup: Option<bool>,
    pub data_retention_days: Option<i64>,
}

/// Metric tables produced by the site-level system check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemMetrics {
    pub sysinfo: Vec<SysInfoRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_map_to_labels() {
        assert_eq!(DeviceState::from_code(6), Some(DeviceState::Unreachable));
        assert_eq!(DeviceState::from_code(6).map(|s| s.to_string()).as_deref(), Some("unreachable"));
        assert_eq!(
            DeviceState::from_code(2).map(|s| s.to_string()).as_deref(),
            Some("pending adoption")
        );
    }

    #[test]
    fn unknown_state_code_is_absent() {
        assert_eq!(DeviceState::from_code(99), None);
        assert_eq!(DeviceState::from_code(3), None);
    }
}
