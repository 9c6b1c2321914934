// ── Device domain types ──

use serde::{Deserialize, Serialize};

/// A managed device, flattened from the NBI `network.devices` entry.
///
/// Optional text fields are empty strings when the controller did not
/// report them. The IP is passed through verbatim, without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub ip: String,
    pub reachable: bool,
    pub vendor: String,
    pub family: String,
    #[serde(default)]
    pub sub_family: String,
    #[serde(default)]
    pub sys_name: String,
    #[serde(default)]
    pub nick_name: String,
}

impl DeviceRecord {
    /// Family with the sub-family appended, e.g. `"VSP Series VSP 4900"`.
    pub fn display_family(&self) -> String {
        display_family(&self.family, &self.sub_family)
    }

    /// sysName, falling back to the nickname.
    pub fn display_name(&self) -> &str {
        display_name(&self.sys_name, &self.nick_name)
    }
}

/// `family`, plus a space and `sub_family` when the latter is non-empty.
pub fn display_family(family: &str, sub_family: &str) -> String {
    if sub_family.is_empty() {
        family.to_owned()
    } else {
        format!("{family} {sub_family}")
    }
}

/// `sys_name` if set, else `nick_name` (which may itself be empty).
pub fn display_name<'a>(sys_name: &'a str, nick_name: &'a str) -> &'a str {
    if sys_name.is_empty() {
        nick_name
    } else {
        sys_name
    }
}
