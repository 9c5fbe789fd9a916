//! Backup endpoints.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{numeric_id, segment};
use crate::client::JiffyClient;
use crate::error::Result;
use crate::validation::prepare;

impl JiffyClient {
    /// List backups of all boxes.
    pub async fn list_backups(&self) -> Result<Value> {
        self.get("backups").await
    }

    /// List the backups of one box.
    pub async fn list_box_backups(&self, box_id: impl Display) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        self.get(&format!("backups/{box_id}")).await
    }

    /// Enable automatic backups for a box. Requires `dayid` and `timeid`.
    pub async fn activate_backup<P: Serialize + ?Sized>(
        &self,
        box_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let body = prepare(params, &["dayid", "timeid"])?;
        self.post(&format!("backups/{box_id}"), &body).await
    }

    /// Move the automatic backup slot of a box. Requires `dayid` and `timeid`.
    pub async fn change_backup<P: Serialize + ?Sized>(
        &self,
        box_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let body = prepare(params, &["dayid", "timeid"])?;
        self.put(&format!("backups/{box_id}"), &body).await
    }

    /// Turn off automatic backups for a box.
    pub async fn deactivate_box_backups(&self, box_id: impl Display) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        self.delete(&format!("backups/{box_id}")).await
    }

    /// Delete a single backup.
    ///
    /// `backup_type` is the slot the backup lives in, e.g. `daily`,
    /// `weekly` or `biweekly`.
    pub async fn delete_backup(
        &self,
        box_id: impl Display,
        backup_type: &str,
        backup_id: impl Display,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let backup_type = segment(backup_type)?;
        let backup_id = segment(backup_id)?;
        self.delete(&format!("backups/{box_id}/{backup_type}/{backup_id}"))
            .await
    }
}
