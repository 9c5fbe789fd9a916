//! IP address endpoints.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::numeric_id;
use crate::client::JiffyClient;
use crate::error::Result;
use crate::validation::prepare;

impl JiffyClient {
    /// List the IP addresses of all boxes.
    pub async fn list_ips(&self) -> Result<Value> {
        self.get("ips").await
    }

    /// List the IP addresses of one box.
    pub async fn box_ips(&self, box_id: impl Display) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        self.get(&format!("ips/{box_id}")).await
    }

    /// Move an additional IP address from `source_box` to another box.
    ///
    /// Requires `targetid`, the id of the receiving box; see
    /// [`IpMove`](crate::IpMove).
    pub async fn move_ip<P: Serialize + ?Sized>(
        &self,
        source_box: impl Display,
        ip_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let source_box = numeric_id(source_box)?;
        let ip_id = numeric_id(ip_id)?;
        let body = prepare(params, &["targetid"])?;
        self.put(&format!("ips/{source_box}/{ip_id}/move"), &body)
            .await
    }
}
