//! Typed request bodies for the JiffyBox endpoints.
//!
//! Every endpoint method accepts any `Serialize` value, so these structs are
//! a convenience: they spell out the documented fields and serialize to the
//! exact key names the API expects. Optional fields are left out of the
//! body when unset.

use serde::Serialize;

/// Target state for [`JiffyClient::change_box_status`](crate::JiffyClient::change_box_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoxStatus {
    /// Boot the box.
    Start,
    /// Shut the box down gracefully.
    Shutdown,
    /// Cut power immediately.
    Pullplug,
    /// Freeze a stopped box; it is billed at a reduced rate.
    Freeze,
    /// Unfreeze a frozen box.
    Thaw,
}

/// Create a box from an installable distribution.
#[derive(Debug, Clone, Serialize)]
pub struct BoxFromDistribution {
    pub name: String,
    pub planid: u32,
    /// Distribution key, e.g. `ubuntu_24_04_64bit`.
    pub distribution: String,
    /// Root password; generated by the provider when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Install the account's stored SSH key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_sshkey: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metainfo: Option<String>,
}

impl BoxFromDistribution {
    pub fn new(name: impl Into<String>, planid: u32, distribution: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planid,
            distribution: distribution.into(),
            password: None,
            use_sshkey: None,
            metainfo: None,
        }
    }
}

/// Create a box from an existing backup.
#[derive(Debug, Clone, Serialize)]
pub struct BoxFromBackup {
    pub name: String,
    pub planid: u32,
    pub backupid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_sshkey: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metainfo: Option<String>,
}

impl BoxFromBackup {
    pub fn new(name: impl Into<String>, planid: u32, backupid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planid,
            backupid: backupid.into(),
            password: None,
            use_sshkey: None,
            metainfo: None,
        }
    }
}

/// Body for a box status change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoxStatusChange {
    pub status: BoxStatus,
}

impl From<BoxStatus> for BoxStatusChange {
    fn from(status: BoxStatus) -> Self {
        Self { status }
    }
}

/// Copy an existing box into a new one.
#[derive(Debug, Clone, Serialize)]
pub struct BoxDuplicate {
    pub name: String,
    pub planid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metainfo: Option<String>,
}

/// Weekly backup slot.
///
/// `dayid` is the weekday (0 = Sunday) and `timeid` the two-hour window of
/// that day (0 = 0:00-2:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupSchedule {
    pub dayid: u8,
    pub timeid: u8,
}

/// Move an additional IP address to another box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IpMove {
    pub targetid: u64,
}

/// A monitoring check definition.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorCheck {
    pub name: String,
    pub ip: String,
    /// Probe type, e.g. `http`, `https`, `smtp`, `ping`.
    #[serde(rename = "checkType")]
    pub check_type: String,
    pub port: u16,
    /// Minutes between probes.
    #[serde(rename = "checkInterval", skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<u32>,
    /// Minutes between repeated alerts while a check is failing.
    #[serde(rename = "reminderInterval", skip_serializing_if = "Option::is_none")]
    pub reminder_interval: Option<u32>,
    /// Failed probes tolerated before alerting.
    #[serde(rename = "retryTolerance", skip_serializing_if = "Option::is_none")]
    pub retry_tolerance: Option<u32>,
    /// Contact group to notify.
    #[serde(rename = "contactGroups", skip_serializing_if = "Option::is_none")]
    pub contact_groups: Option<u64>,
    /// Path requested by HTTP(S) checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Text an HTTP(S) response must contain.
    #[serde(rename = "shouldContain", skip_serializing_if = "Option::is_none")]
    pub should_contain: Option<String>,
}

impl MonitorCheck {
    pub fn new(
        name: impl Into<String>,
        ip: impl Into<String>,
        check_type: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            check_type: check_type.into(),
            port,
            check_interval: None,
            reminder_interval: None,
            retry_tolerance: None,
            contact_groups: None,
            path: None,
            should_contain: None,
        }
    }
}

/// A named set of notification targets.
#[derive(Debug, Clone, Serialize)]
pub struct ContactGroup {
    pub name: String,
    /// Email addresses.
    pub contacts: Vec<String>,
}
