// GraphQL response types
//
// Wire models for the device query. Every level is optional: the NBI omits
// or nulls objects freely depending on controller version and permissions,
// and a missing branch means "nothing there" rather than a broken response.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// The fixed device query sent to `/nbi/graphql`.
pub const DEVICE_QUERY: &str = concat!(
    "query { network { devices { up ip sysName nickName ",
    "deviceData { vendor family subFamily } } } }",
);

/// Top-level GraphQL response envelope.
///
/// ```json
/// { "data": { "network": { "devices": [ ... ] } }, "errors": [ ... ] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default, deserialize_with = "object")]
    pub data: Option<DeviceData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// Parse a raw response body. Malformed JSON fails, and so does a
    /// non-object where the schema has an object.
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        match serde_json::from_slice::<Option<Map<String, Value>>>(body)? {
            Some(map) => Ok(serde_json::from_value(Value::Object(map))?),
            None => Ok(Self::default()),
        }
    }

    /// Devices in response order, or an empty slice when any level of
    /// `data.network.devices` is absent.
    pub fn devices(&self) -> &[NbiDevice] {
        self.data
            .as_ref()
            .and_then(|d| d.network.as_ref())
            .and_then(|n| n.devices.as_deref())
            .unwrap_or_default()
    }

    /// Consume the envelope, yielding the device array.
    pub fn into_devices(self) -> Vec<NbiDevice> {
        self.data
            .and_then(|d| d.network)
            .and_then(|n| n.devices)
            .unwrap_or_default()
    }
}

/// A GraphQL-level error entry. Only the message is modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeviceData {
    #[serde(default, deserialize_with = "object")]
    pub network: Option<Network>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Network {
    #[serde(default, deserialize_with = "objects")]
    pub devices: Option<Vec<NbiDevice>>,
}

/// One entry of `network.devices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbiDevice {
    #[serde(default)]
    pub up: Option<bool>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub sys_name: Option<String>,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default, deserialize_with = "object")]
    pub device_data: Option<NbiDeviceData>,
}

/// Vendor/family block nested in each device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbiDeviceData {
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub sub_family: Option<String>,
}

// serde's derived struct visitors also accept a JSON array and fill fields
// by position. These only take objects (or null).

fn object<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<Map<String, Value>>::deserialize(de)?
        .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
        .transpose()
}

fn objects<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<Vec<Map<String, Value>>>::deserialize(de)?
        .map(|items| {
            items
                .into_iter()
                .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
                .collect()
        })
        .transpose()
}
