// ── Device snapshot normalizer ──
//
// Turns one raw, partially-populated device snapshot into flat metric rows.
// Extraction is best-effort: nameless sub-entries are dropped and recorded
// as diagnostics, duplicate MACs are excluded from the MAC table, and the
// device row is always emitted. Numeric coercion maps null to absent, never
// to zero.

use std::collections::HashSet;

use serde_json::Value;
use tracing::info;

use uniprobe_api::models::{RawDevice, RawPort, RawRadio, RawVap};

use crate::model::{
    DeviceMetrics, DeviceRow, DeviceState, MacRow, PortRow, RadioRow, UplinkRow, VapRow,
};
use crate::outcome::Diagnostic;

// ── Coercion helpers ────────────────────────────────────────────────

/// Accept a value only as a non-negative integer; floats and negatives are
/// treated as absent. The vendor reports -1 for "no satisfaction data".
fn uint(value: Option<&Value>) -> Option<i64> {
    value?.as_i64().filter(|v| *v >= 0)
}

/// Coerce a JSON number (or numeric string) to an integer; null and
/// non-numeric values are absent.
fn to_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Coerce a JSON number (or numeric string) to a float; null and
/// non-numeric values are absent. The vendor ships CPU/memory/PoE figures
/// as strings on most firmware.
fn to_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// A name counts only when present and non-empty.
fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Look up a per-radio counter under the `"{radio name}-{metric}"` key
/// convention of the device's statistics map. The string-concatenated key
/// is a real contract of the upstream API.
fn radio_stat(ap: &serde_json::Map<String, Value>, name: &str, metric: &str) -> Option<i64> {
    to_int(ap.get(&format!("{name}-{metric}")))
}

// ── Normalizer ──────────────────────────────────────────────────────

/// Normalize one raw device snapshot into metric tables.
///
/// Always returns the best-effort result; anomalies are reported through
/// the returned diagnostics instead of aborting the snapshot.
pub fn normalize_device(raw: &RawDevice) -> (DeviceMetrics, Vec<Diagnostic>) {
    let mut metrics = DeviceMetrics::default();
    let mut diagnostics = Vec::new();
    let empty_stats = serde_json::Map::new();

    if let Some(table) = &raw.radio_table_stats {
        // The same counters exist in the vap_table, but aggregated; the
        // per-radio statistics map is the authoritative source here.
        let ap = raw.stat.as_ref().map_or(&empty_stats, |s| &s.ap);
        let rows: Vec<RadioRow> = table.iter().filter_map(|r| radio_row(r, ap)).collect();
        if rows.len() != table.len() {
            diagnostics.push(Diagnostic::RadioWithoutName);
        }
        metrics.radio = Some(rows);
    }

    if let Some(table) = &raw.vap_table {
        let rows: Vec<VapRow> = table.iter().filter_map(vap_row).collect();
        if rows.len() != table.len() {
            diagnostics.push(Diagnostic::VapWithoutName);
        }
        metrics.vap = Some(rows);
    }

    if let Some(uplink) = &raw.uplink {
        if let Some(name) = non_empty(uplink.name.as_deref()) {
            metrics.uplink = Some(vec![UplinkRow {
                name: name.to_owned(),
                full_duplex: uplink.full_duplex,
                ip: uplink.ip.clone(),
                mac: uplink.mac.clone(),
                max_speed: uplink.max_speed,
                netmask: uplink.netmask.clone(),
                num_port: uplink.num_port,
                port_idx: uplink.port_idx,
                rx_bytes: uplink.rx_bytes,
                rx_dropped: uplink.rx_dropped,
                rx_errors: uplink.rx_errors,
                rx_multicast: uplink.rx_multicast,
                rx_packets: uplink.rx_packets,
                speed: uplink.speed,
                tx_bytes: uplink.tx_bytes,
                tx_dropped: uplink.tx_dropped,
                tx_errors: uplink.tx_errors,
                tx_packets: uplink.tx_packets,
                uplink_type: uplink.uplink_type.clone(),
                uplink_device_name: uplink.uplink_device_name.clone(),
                uplink_mac: uplink.uplink_mac.clone(),
                uplink_remote_port: uplink.uplink_remote_port,
                uplink_source: uplink.uplink_source.clone(),
            }]);
        } else {
            // Expected for some roles; diagnostics stay reserved for
            // genuine incompleteness.
            info!("failed to resolve uplink name, dropping uplink row");
        }
    }

    if let Some(table) = &raw.port_table {
        let mut ports = Vec::new();
        let mut mac_rows = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicates: Vec<String> = Vec::new();
        let mut complete = true;

        for port in table {
            let Some(name) = non_empty(port.name.as_deref()) else {
                complete = false;
                continue;
            };
            ports.push(port_row(name, port));

            for entry in &port.mac_table {
                if !seen.insert(entry.mac.as_str()) {
                    if !duplicates.contains(&entry.mac) {
                        duplicates.push(entry.mac.clone());
                    }
                    continue;
                }
                mac_rows.push(MacRow {
                    name: entry.mac.clone(),
                    port_name: name.to_owned(),
                    age: entry.age,
                    ip: entry.ip.clone(),
                    uptime: entry.uptime,
                    vlan: entry.vlan,
                    is_static: entry.is_static,
                });
            }
        }

        if !complete {
            diagnostics.push(Diagnostic::PortWithoutName);
        }
        metrics.port = Some(ports);
        metrics.mac = Some(mac_rows);
        if !duplicates.is_empty() {
            diagnostics.push(Diagnostic::DuplicateMacs(duplicates));
        }
    }

    metrics.device = vec![device_row(raw)];

    (metrics, diagnostics)
}

fn radio_row(raw: &RawRadio, ap: &serde_json::Map<String, Value>) -> Option<RadioRow> {
    let name = non_empty(raw.name.as_deref())?;
    Some(RadioRow {
        cu_self_rx: raw.cu_self_rx,
        cu_self_tx: raw.cu_self_tx,
        cu_total: raw.cu_total,
        num_sta: raw.num_sta,
        radio: raw.radio.clone(),
        satisfaction: uint(raw.satisfaction.as_ref()),
        mac_filter_rejections: radio_stat(ap, name, "mac_filter_rejections"),
        rx_bytes: radio_stat(ap, name, "rx_bytes"),
        rx_crypts: radio_stat(ap, name, "rx_crypts"),
        rx_dropped: radio_stat(ap, name, "rx_dropped"),
        rx_errors: radio_stat(ap, name, "rx_errors"),
        rx_frags: radio_stat(ap, name, "rx_frags"),
        tx_bytes: radio_stat(ap, name, "tx_bytes"),
        tx_dropped: radio_stat(ap, name, "tx_dropped"),
        tx_errors: radio_stat(ap, name, "tx_errors"),
        tx_packets: radio_stat(ap, name, "tx_packets"),
        tx_power: raw.tx_power,
        tx_retries: radio_stat(ap, name, "tx_retries"),
        name: name.to_owned(),
    })
}

fn vap_row(raw: &RawVap) -> Option<VapRow> {
    let name = non_empty(raw.name.as_deref())?;
    Some(VapRow {
        name: name.to_owned(),
        bssid: raw.bssid.clone(),
        channel: raw.channel,
        essid: raw.essid.clone(),
        extchannel: raw.extchannel,
        num_sta: raw.num_sta,
        radio_name: raw.radio_name.clone(),
        rx_bytes: raw.rx_bytes,
        rx_crypts: raw.rx_crypts,
        rx_dropped: raw.rx_dropped,
        rx_errors: raw.rx_errors,
        rx_frags: raw.rx_frags,
        tx_bytes: raw.tx_bytes,
        tx_dropped: raw.tx_dropped,
        tx_errors: raw.tx_errors,
        tx_power: raw.tx_power,
        satisfaction: uint(raw.satisfaction.as_ref()),
    })
}

fn port_row(name: &str, raw: &RawPort) -> PortRow {
    PortRow {
        name: name.to_owned(),
        port_idx: raw.port_idx,
        poe_caps: raw.poe_caps,
        poe_mode: raw.poe_mode.clone(),
        port_poe: raw.port_poe,
        poe_good: raw.poe_good,
        poe_power: to_float(raw.poe_power.as_ref()),
        media: raw.media.clone(),
        op_mode: raw.op_mode.clone(),
        autoneg: raw.autoneg,
        speed_caps: raw.speed_caps,
        forward: raw.forward.clone(),
        enable: raw.enable,
        full_duplex: raw.full_duplex,
        is_uplink: raw.is_uplink,
        up: raw.up,
        masked: raw.masked,
        flowctrl_rx: raw.flowctrl_rx,
        flowctrl_tx: raw.flowctrl_tx,
        jumbo: raw.jumbo,
        speed: raw.speed,
        stp_pathcost: raw.stp_pathcost,
        stp_state: raw.stp_state.clone(),
        satisfaction: raw.satisfaction,
        rx_broadcast: raw.rx_broadcast,
        rx_bytes: raw.rx_bytes,
        rx_dropped: raw.rx_dropped,
        rx_errors: raw.rx_errors,
        rx_multicast: raw.rx_multicast,
        rx_packets: raw.rx_packets,
        tx_broadcast: raw.tx_broadcast,
        tx_bytes: raw.tx_bytes,
        tx_dropped: raw.tx_dropped,
        tx_errors: raw.tx_errors,
        tx_multicast: raw.tx_multicast,
        tx_packets: raw.tx_packets,
    }
}

fn device_row(raw: &RawDevice) -> DeviceRow {
    let stats = raw.system_stats.as_ref();
    DeviceRow {
        // Identity falls back to the MAC when the device is unnamed.
        name: raw
            .name
            .clone()
            .or_else(|| raw.mac.clone())
            .unwrap_or_default(),
        mac: raw.mac.clone(),
        state: raw.state.and_then(DeviceState::from_code),
        adopted: raw.adopted,
        device_type: raw.device_type.clone(),
        model: raw.model.clone(),
        num_sta: raw.num_sta,
        ip: raw.ip.clone(),
        isolated: raw.isolated,
        uplink: raw
            .uplink
            .as_ref()
            .and_then(|u| non_empty(u.name.as_deref()))
            .map(str::to_owned),
        version: raw.version.clone(),
        uptime: raw.uptime,
        cpu: to_float(stats.and_then(|s| s.cpu.as_ref())),
        mem: to_float(stats.and_then(|s| s.mem.as_ref())),
        satisfaction: uint(raw.satisfaction.as_ref()),
        total_used_power: raw.total_used_power,
        config_network_type: raw.config_network.as_ref().and_then(|c| c.network_type.clone()),
        bonding_enabled: raw.config_network.as_ref().and_then(|c| c.bonding_enabled),
        kernel_version: raw.kernel_version.clone(),
        serial: raw.serial.clone(),
        license_state: raw.license_state.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn raw_device(value: serde_json::Value) -> RawDevice {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn radio_rows_combine_direct_fields_with_stat_map() {
        let raw = raw_device(json!({
            "name": "office-ap",
            "radio_table_stats": [
                { "name": "wifi0", "num_sta": 4, "cu_total": 17, "satisfaction": 96 }
            ],
            "stat": { "ap": {
                "wifi0-rx_bytes": 12345.0,
                "wifi0-tx_bytes": 67890,
                "wifi0-tx_retries": 3
            } }
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());

        let radios = metrics.radio.unwrap();
        assert_eq!(radios.len(), 1);
        assert_eq!(radios[0].name, "wifi0");
        assert_eq!(radios[0].num_sta, Some(4));
        assert_eq!(radios[0].satisfaction, Some(96));
        assert_eq!(radios[0].rx_bytes, Some(12345));
        assert_eq!(radios[0].tx_bytes, Some(67890));
        assert_eq!(radios[0].tx_retries, Some(3));
        // No such key in the stat map -- absent, not zero.
        assert_eq!(radios[0].rx_errors, None);
    }

    #[test]
    fn nameless_radio_is_dropped_and_flagged() {
        let raw = raw_device(json!({
            "name": "office-ap",
            "radio_table_stats": [
                { "name": "wifi0" },
                { "num_sta": 2 },
                { "name": "wifi1" }
            ]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);

        let radios = metrics.radio.unwrap();
        assert_eq!(radios.len(), 2);
        assert_eq!(radios[0].name, "wifi0");
        assert_eq!(radios[1].name, "wifi1");
        assert_eq!(diagnostics, vec![Diagnostic::RadioWithoutName]);
        // The rest of the snapshot is unaffected.
        assert_eq!(metrics.device.len(), 1);
        assert_eq!(metrics.device[0].name, "office-ap");
    }

    #[test]
    fn empty_radio_name_counts_as_missing() {
        let raw = raw_device(json!({
            "name": "ap",
            "radio_table_stats": [{ "name": "" }]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert_eq!(metrics.radio.unwrap().len(), 0);
        assert_eq!(diagnostics, vec![Diagnostic::RadioWithoutName]);
    }

    #[test]
    fn nameless_vap_is_dropped_and_flagged() {
        let raw = raw_device(json!({
            "name": "ap",
            "vap_table": [
                { "name": "guest", "essid": "Guest", "num_sta": 1 },
                { "essid": "Orphan" }
            ]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        let vaps = metrics.vap.unwrap();
        assert_eq!(vaps.len(), 1);
        assert_eq!(vaps[0].name, "guest");
        assert_eq!(diagnostics, vec![Diagnostic::VapWithoutName]);
    }

    #[test]
    fn satisfaction_accepts_only_non_negative_integers() {
        let raw = raw_device(json!({
            "name": "ap",
            "satisfaction": -1,
            "vap_table": [
                { "name": "a", "satisfaction": 98 },
                { "name": "b", "satisfaction": 98.5 }
            ]
        }));

        let (metrics, _) = normalize_device(&raw);
        assert_eq!(metrics.device[0].satisfaction, None);
        let vaps = metrics.vap.unwrap();
        assert_eq!(vaps[0].satisfaction, Some(98));
        assert_eq!(vaps[1].satisfaction, None);
    }

    #[test]
    fn uplink_without_name_is_omitted_without_diagnostic() {
        let raw = raw_device(json!({
            "name": "ap",
            "uplink": { "rx_bytes": 10, "type": "wireless" }
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert_eq!(metrics.uplink, None);
        assert!(diagnostics.is_empty());
        // The device row's uplink reference is absent as well.
        assert_eq!(metrics.device[0].uplink, None);
    }

    #[test]
    fn wireless_uplink_keeps_wired_metrics_absent() {
        let raw = raw_device(json!({
            "name": "ap",
            "uplink": {
                "name": "eth0",
                "type": "wireless",
                "rx_bytes": 10,
                "rx_packets": 2,
                "tx_bytes": 20,
                "tx_packets": 4,
                "uplink_device_name": "core-switch"
            }
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());
        let uplink = metrics.uplink.unwrap();
        assert_eq!(uplink.len(), 1);
        assert_eq!(uplink[0].name, "eth0");
        assert_eq!(uplink[0].uplink_type.as_deref(), Some("wireless"));
        assert_eq!(uplink[0].speed, None);
        assert_eq!(uplink[0].netmask, None);
        assert_eq!(metrics.device[0].uplink.as_deref(), Some("eth0"));
    }

    #[test]
    fn nameless_port_is_dropped_and_flagged() {
        let raw = raw_device(json!({
            "name": "switch",
            "port_table": [
                { "name": "Port 1", "port_idx": 1 },
                { "port_idx": 2 }
            ]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        let ports = metrics.port.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].name, "Port 1");
        assert_eq!(diagnostics, vec![Diagnostic::PortWithoutName]);
    }

    #[test]
    fn duplicate_mac_keeps_first_occurrence() {
        let raw = raw_device(json!({
            "name": "switch",
            "port_table": [
                {
                    "name": "Port 1",
                    "mac_table": [
                        { "mac": "aa:bb:cc:dd:ee:01", "age": 10, "uptime": 100, "vlan": 1, "static": false }
                    ]
                },
                {
                    "name": "Port 2",
                    "mac_table": [
                        { "mac": "aa:bb:cc:dd:ee:01", "age": 20, "uptime": 200, "vlan": 1, "static": false },
                        { "mac": "aa:bb:cc:dd:ee:02", "age": 5, "uptime": 50, "vlan": 2, "static": true }
                    ]
                }
            ]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);

        let macs = metrics.mac.unwrap();
        assert_eq!(macs.len(), 2);
        assert_eq!(macs[0].name, "aa:bb:cc:dd:ee:01");
        assert_eq!(macs[0].port_name, "Port 1");
        assert_eq!(macs[0].age, Some(10));
        assert_eq!(macs[1].name, "aa:bb:cc:dd:ee:02");

        assert_eq!(
            diagnostics,
            vec![Diagnostic::DuplicateMacs(vec!["aa:bb:cc:dd:ee:01".into()])]
        );
        assert_eq!(
            diagnostics[0].to_string(),
            "The same MAC address detected on multiple ports (aa:bb:cc:dd:ee:01)"
        );
    }

    #[test]
    fn six_duplicates_summarize_to_a_count() {
        let first_port: Vec<_> = (1..=6)
            .map(|i| json!({ "mac": format!("aa:bb:cc:dd:ee:{i:02}") }))
            .collect();
        let second_port = first_port.clone();
        let raw = raw_device(json!({
            "name": "switch",
            "port_table": [
                { "name": "Port 1", "mac_table": first_port },
                { "name": "Port 2", "mac_table": second_port }
            ]
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert_eq!(metrics.mac.unwrap().len(), 6);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "The same MAC address detected on multiple ports (6 duplicates found)"
        );
    }

    #[test]
    fn missing_name_and_duplicate_diagnostics_co_occur() {
        let raw = raw_device(json!({
            "name": "switch",
            "radio_table_stats": [{ "num_sta": 1 }],
            "port_table": [
                { "name": "Port 1", "mac_table": [{ "mac": "aa:bb:cc:dd:ee:01" }] },
                { "name": "Port 2", "mac_table": [{ "mac": "aa:bb:cc:dd:ee:01" }] }
            ]
        }));

        let (_, diagnostics) = normalize_device(&raw);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::RadioWithoutName,
                Diagnostic::DuplicateMacs(vec!["aa:bb:cc:dd:ee:01".into()]),
            ]
        );
    }

    #[test]
    fn device_row_maps_state_and_coerces_system_stats() {
        let raw = raw_device(json!({
            "name": "gateway",
            "mac": "aa:bb:cc:dd:ee:ff",
            "state": 6,
            "adopted": true,
            "type": "ugw",
            "system-stats": { "cpu": "12.5", "mem": 43.7 },
            "config_network": { "type": "dhcp", "bonding_enabled": false }
        }));

        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());

        let device = &metrics.device[0];
        assert_eq!(device.state, Some(DeviceState::Unreachable));
        assert_eq!(device.cpu, Some(12.5));
        assert_eq!(device.mem, Some(43.7));
        assert_eq!(device.config_network_type.as_deref(), Some("dhcp"));
        assert_eq!(device.bonding_enabled, Some(false));
    }

    #[test]
    fn unknown_state_code_yields_absent_state() {
        let raw = raw_device(json!({ "name": "gw", "state": 99 }));
        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());
        assert_eq!(metrics.device[0].state, None);
    }

    #[test]
    fn unnamed_device_falls_back_to_mac() {
        let raw = raw_device(json!({ "mac": "aa:bb:cc:dd:ee:ff" }));
        let (metrics, _) = normalize_device(&raw);
        assert_eq!(metrics.device[0].name, "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn absent_sections_stay_absent() {
        let raw = raw_device(json!({ "name": "gw" }));
        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());
        assert_eq!(metrics.radio, None);
        assert_eq!(metrics.vap, None);
        assert_eq!(metrics.uplink, None);
        assert_eq!(metrics.port, None);
        assert_eq!(metrics.mac, None);
        assert_eq!(metrics.device.len(), 1);
    }

    #[test]
    fn empty_port_table_is_present_but_empty() {
        let raw = raw_device(json!({ "name": "gw", "port_table": [] }));
        let (metrics, diagnostics) = normalize_device(&raw);
        assert!(diagnostics.is_empty());
        assert_eq!(metrics.port, Some(vec![]));
        assert_eq!(metrics.mac, Some(vec![]));
    }
}
