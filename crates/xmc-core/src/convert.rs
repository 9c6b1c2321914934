// ── Wire → domain conversion ──
//
// Decodes the raw GraphQL body and flattens each device into a
// `DeviceRecord`. A body that is valid JSON but lacks the
// `data.network.devices` path decodes to an empty list. Malformed JSON and
// wrongly typed values (an array where an object belongs) are errors.

use tracing::{debug, warn};

use xmc_nbi::{GraphqlResponse, NbiDevice};

use crate::error::CoreError;
use crate::model::DeviceRecord;

impl From<NbiDevice> for DeviceRecord {
    fn from(d: NbiDevice) -> Self {
        let data = d.device_data.unwrap_or_default();
        Self {
            ip: d.ip.unwrap_or_default(),
            reachable: d.up.unwrap_or_default(),
            vendor: data.vendor.unwrap_or_default(),
            family: data.family.unwrap_or_default(),
            sub_family: data.sub_family.unwrap_or_default(),
            sys_name: d.sys_name.unwrap_or_default(),
            nick_name: d.nick_name.unwrap_or_default(),
        }
    }
}

/// Decode a GraphQL response body into device records, in response order.
pub fn decode(body: &[u8]) -> Result<Vec<DeviceRecord>, CoreError> {
    let resp = GraphqlResponse::from_slice(body)?;

    if let Some(errors) = resp.errors.as_deref() {
        for e in errors {
            warn!(message = %e.message, "controller reported a GraphQL error");
        }
    }

    let devices: Vec<DeviceRecord> = resp.into_devices().into_iter().map(Into::into).collect();
    debug!(count = devices.len(), "decoded device list");
    Ok(devices)
}
