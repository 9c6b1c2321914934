// ── Status report rendering ──
//
// Pure functions: sort by IP string, render one fixed-format line per
// device. Callers decide where the lines go.

use serde::Serialize;

use crate::model::DeviceRecord;

/// Devices ordered by `ip`, compared as plain strings (so `10.0.0.10`
/// sorts before `10.0.0.2`). Equal IPs keep their input order.
pub fn sorted(devices: &[DeviceRecord]) -> Vec<&DeviceRecord> {
    let mut out: Vec<&DeviceRecord> = devices.iter().collect();
    out.sort_by(|a, b| a.ip.cmp(&b.ip));
    out
}

/// One report line:
///
/// ```text
/// + 10.0.0.2 (Extreme VSP Series VSP 4900 "core1") is up.
/// - 10.0.0.1 (Extreme Summit Series "edge2") is down.
/// ```
pub fn render_line(device: &DeviceRecord) -> String {
    let (marker, state) = if device.reachable {
        ('+', "up")
    } else {
        ('-', "down")
    };
    format!(
        "{marker} {} ({} {} \"{}\") is {state}.",
        device.ip,
        device.vendor,
        device.display_family(),
        device.display_name(),
    )
}

/// Sort and render the full report.
pub fn format(devices: &[DeviceRecord]) -> Vec<String> {
    sorted(devices).into_iter().map(render_line).collect()
}

/// JSON view of a device: the decoded attributes plus the derived display fields.
#[derive(Debug, Serialize)]
pub struct DeviceView<'a> {
    #[serde(flatten)]
    pub device: &'a DeviceRecord,
    pub display_family: String,
    pub display_name: &'a str,
}

impl<'a> From<&'a DeviceRecord> for DeviceView<'a> {
    fn from(device: &'a DeviceRecord) -> Self {
        Self {
            device,
            display_family: device.display_family(),
            display_name: device.display_name(),
        }
    }
}

/// Sorted JSON views, for machine-readable output.
pub fn views(devices: &[DeviceRecord]) -> Vec<DeviceView<'_>> {
    sorted(devices).into_iter().map(DeviceView::from).collect()
}
