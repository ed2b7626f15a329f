// Raw response models for the controller's status endpoints.
//
// Every endpoint wraps its payload in the `Envelope<T>` response envelope.
// Fields use `#[serde(default)]` liberally because the API is inconsistent
// about field presence across firmware versions and device roles: a wireless
// uplink has no wired metrics, a gateway has no radios, and so on. Fields
// the vendor ships as number-or-string (or as non-integer numbers where an
// integer is expected) are kept as `serde_json::Value` and coerced by the
// normalizer.

use serde::Deserialize;
use serde_json::Value;

// ── Response envelope ────────────────────────────────────────────────

/// Standard controller response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    #[serde(default)]
    pub data: Vec<T>,
}

/// Envelope metadata. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Device snapshot ──────────────────────────────────────────────────

/// One element of `stat/device` -- a full device status snapshot.
///
/// Top-level sections (`radio_table_stats`, `vap_table`, `uplink`,
/// `port_table`, `stat`) are optional; their presence depends on the device
/// role. The per-radio counter map under `stat.ap` uses string keys of the
/// form `"{radio name}-{metric}"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDevice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    /// Integer state code; see the device-state table in `uniprobe-core`.
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub adopted: Option<bool>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub isolated: Option<bool>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub uptime: Option<i64>,
    /// Vendor sometimes reports -1 or a float here; validated downstream.
    #[serde(default)]
    pub satisfaction: Option<Value>,
    #[serde(default)]
    pub total_used_power: Option<f64>,
    #[serde(default)]
    pub kernel_version: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub license_state: Option<String>,
    #[serde(default, rename = "system-stats")]
    pub system_stats: Option<RawSystemStats>,
    #[serde(default)]
    pub config_network: Option<RawConfigNetwork>,
    #[serde(default)]
    pub radio_table_stats: Option<Vec<RawRadio>>,
    #[serde(default)]
    pub vap_table: Option<Vec<RawVap>>,
    #[serde(default)]
    pub uplink: Option<RawUplink>,
    #[serde(default)]
    pub port_table: Option<Vec<RawPort>>,
    #[serde(default)]
    pub stat: Option<RawDeviceStat>,
}

/// CPU/memory utilization. Shipped as strings on most firmware.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSystemStats {
    #[serde(default)]
    pub cpu: Option<Value>,
    #[serde(default)]
    pub mem: Option<Value>,
}

/// Network-config metadata for the device row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigNetwork {
    #[serde(default, rename = "type")]
    pub network_type: Option<String>,
    #[serde(default)]
    pub bonding_enabled: Option<bool>,
}

/// Container for per-radio statistics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeviceStat {
    /// Counter map keyed by `"{radio name}-{metric}"`.
    #[serde(default)]
    pub ap: serde_json::Map<String, Value>,
}

/// One entry of `radio_table_stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRadio {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cu_self_rx: Option<i64>,
    #[serde(default)]
    pub cu_self_tx: Option<i64>,
    #[serde(default)]
    pub cu_total: Option<i64>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    #[serde(default)]
    pub radio: Option<String>,
    #[serde(default)]
    pub satisfaction: Option<Value>,
    #[serde(default)]
    pub tx_power: Option<i64>,
}

/// One entry of `vap_table` -- a virtual access point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVap {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bssid: Option<String>,
    #[serde(default)]
    pub channel: Option<i64>,
    #[serde(default)]
    pub essid: Option<String>,
    #[serde(default)]
    pub extchannel: Option<i64>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    /// References a `radio_table_stats` entry by name.
    #[serde(default)]
    pub radio_name: Option<String>,
    #[serde(default)]
    pub rx_bytes: Option<i64>,
    #[serde(default)]
    pub rx_crypts: Option<i64>,
    #[serde(default)]
    pub rx_dropped: Option<i64>,
    #[serde(default)]
    pub rx_errors: Option<i64>,
    #[serde(default)]
    pub rx_frags: Option<i64>,
    #[serde(default)]
    pub tx_bytes: Option<i64>,
    #[serde(default)]
    pub tx_dropped: Option<i64>,
    #[serde(default)]
    pub tx_errors: Option<i64>,
    #[serde(default)]
    pub tx_power: Option<i64>,
    #[serde(default)]
    pub satisfaction: Option<Value>,
}

/// The device's uplink. Wired-only metrics are absent on wireless uplinks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUplink {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_duplex: Option<bool>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub max_speed: Option<i64>,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(default)]
    pub num_port: Option<i64>,
    #[serde(default)]
    pub port_idx: Option<i64>,
    #[serde(default)]
    pub rx_bytes: Option<i64>,
    #[serde(default)]
    pub rx_dropped: Option<i64>,
    #[serde(default)]
    pub rx_errors: Option<i64>,
    #[serde(default)]
    pub rx_multicast: Option<i64>,
    #[serde(default)]
    pub rx_packets: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub tx_bytes: Option<i64>,
    #[serde(default)]
    pub tx_dropped: Option<i64>,
    #[serde(default)]
    pub tx_errors: Option<i64>,
    #[serde(default)]
    pub tx_packets: Option<i64>,
    /// `"wire"` or `"wireless"`.
    #[serde(default, rename = "type")]
    pub uplink_type: Option<String>,
    #[serde(default)]
    pub uplink_device_name: Option<String>,
    #[serde(default)]
    pub uplink_mac: Option<String>,
    #[serde(default)]
    pub uplink_remote_port: Option<i64>,
    #[serde(default)]
    pub uplink_source: Option<String>,
}

/// One entry of `port_table`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPort {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub port_idx: Option<i64>,
    #[serde(default)]
    pub poe_caps: Option<i64>,
    #[serde(default)]
    pub poe_mode: Option<String>,
    #[serde(default)]
    pub port_poe: Option<bool>,
    #[serde(default)]
    pub poe_good: Option<bool>,
    /// Shipped as a string on most firmware.
    #[serde(default)]
    pub poe_power: Option<Value>,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub op_mode: Option<String>,
    #[serde(default)]
    pub autoneg: Option<bool>,
    #[serde(default)]
    pub speed_caps: Option<i64>,
    #[serde(default)]
    pub forward: Option<String>,
    #[serde(default)]
    pub enable: Option<bool>,
    #[serde(default)]
    pub full_duplex: Option<bool>,
    #[serde(default)]
    pub is_uplink: Option<bool>,
    #[serde(default)]
    pub up: Option<bool>,
    #[serde(default)]
    pub masked: Option<bool>,
    #[serde(default)]
    pub flowctrl_rx: Option<bool>,
    #[serde(default)]
    pub flowctrl_tx: Option<bool>,
    #[serde(default)]
    pub jumbo: Option<bool>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub stp_pathcost: Option<i64>,
    #[serde(default)]
    pub stp_state: Option<String>,
    #[serde(default)]
    pub satisfaction: Option<i64>,
    #[serde(default)]
    pub rx_broadcast: Option<i64>,
    #[serde(default)]
    pub rx_bytes: Option<i64>,
    #[serde(default)]
    pub rx_dropped: Option<i64>,
    #[serde(default)]
    pub rx_errors: Option<i64>,
    #[serde(default)]
    pub rx_multicast: Option<i64>,
    #[serde(default)]
    pub rx_packets: Option<i64>,
    #[serde(default)]
    pub tx_broadcast: Option<i64>,
    #[serde(default)]
    pub tx_bytes: Option<i64>,
    #[serde(default)]
    pub tx_dropped: Option<i64>,
    #[serde(default)]
    pub tx_errors: Option<i64>,
    #[serde(default)]
    pub tx_multicast: Option<i64>,
    #[serde(default)]
    pub tx_packets: Option<i64>,
    #[serde(default)]
    pub mac_table: Vec<RawMacEntry>,
}

/// A client MAC observed on a port.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMacEntry {
    pub mac: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(default)]
    pub vlan: Option<i64>,
    #[serde(default, rename = "static")]
    pub is_static: Option<bool>,
}

// ── Site status ──────────────────────────────────────────────────────

/// One element of `stat/sysinfo` -- controller-level status.
///
/// The field set varies by platform and firmware; everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSysInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub previous_version: Option<String>,
    #[serde(default)]
    pub build: Option<String>,
    #[serde(default)]
    pub update_available: Option<bool>,
    #[serde(default)]
    pub update_downloaded: Option<bool>,
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub autobackup: Option<bool>,
    #[serde(default)]
    pub data_retention_days: Option<i64>,
}
