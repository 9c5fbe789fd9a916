//! Monitoring check endpoints.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{numeric_id, segment};
use crate::client::JiffyClient;
use crate::error::Result;
use crate::validation::prepare;

impl JiffyClient {
    /// List all monitoring checks.
    pub async fn list_monitors(&self) -> Result<Value> {
        self.get("monitoring").await
    }

    /// Get the settings of one monitoring check.
    pub async fn monitor_details(&self, check_id: impl Display) -> Result<Value> {
        let check_id = numeric_id(check_id)?;
        self.get(&format!("monitoring/{check_id}")).await
    }

    /// Delete a monitoring check.
    pub async fn delete_monitor(&self, check_id: impl Display) -> Result<Value> {
        let check_id = numeric_id(check_id)?;
        self.delete(&format!("monitoring/{check_id}")).await
    }

    /// Create a monitoring check.
    ///
    /// Requires `name`, `ip`, `checkType` and `port`; see
    /// [`MonitorCheck`](crate::MonitorCheck).
    pub async fn create_monitor<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let body = prepare(params, &["name", "ip", "checkType", "port"])?;
        self.post("monitoring", &body).await
    }

    /// Copy a check, overriding at least one setting.
    ///
    /// Requires `name`, `ip` and `checkType`.
    pub async fn duplicate_monitor<P: Serialize + ?Sized>(
        &self,
        source_check: impl Display,
        params: &P,
    ) -> Result<Value> {
        let source_check = numeric_id(source_check)?;
        let body = prepare(params, &["name", "ip", "checkType"])?;
        self.post(&format!("monitoring/{source_check}"), &body)
            .await
    }

    /// Change settings of an existing check.
    pub async fn update_monitor<P: Serialize + ?Sized>(
        &self,
        check_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let check_id = numeric_id(check_id)?;
        let body = prepare(params, &[])?;
        self.put(&format!("monitoring/{check_id}"), &body).await
    }

    /// Current state of one check.
    pub async fn monitor_status(&self, check_id: impl Display) -> Result<Value> {
        let check_id = numeric_id(check_id)?;
        self.get(&format!("monitoring/{check_id}/status")).await
    }

    /// Current state of all checks probing one IP address.
    pub async fn ip_monitor_statuses(&self, ip: &str) -> Result<Value> {
        let ip = segment(ip)?;
        self.get(&format!("monitoring/{ip}/status")).await
    }
}
