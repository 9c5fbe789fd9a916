//! Box (virtual machine) endpoints.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::numeric_id;
use crate::client::JiffyClient;
use crate::error::Result;
use crate::validation::prepare;

impl JiffyClient {
    /// List all boxes of the account.
    pub async fn list_boxes(&self) -> Result<Value> {
        self.get("jiffyBoxes").await
    }

    /// Get details of one box.
    ///
    /// # Errors
    ///
    /// Fails without a request if `box_id` is not numeric.
    pub async fn box_details(&self, box_id: impl Display) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        self.get(&format!("jiffyBoxes/{box_id}")).await
    }

    /// Delete a box. The box has to be stopped first.
    pub async fn delete_box(&self, box_id: impl Display) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        self.delete(&format!("jiffyBoxes/{box_id}")).await
    }

    /// Create a box from a distribution.
    ///
    /// Requires `name`, `planid` and `distribution`; see
    /// [`BoxFromDistribution`](crate::BoxFromDistribution).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jiffybox::{BoxFromDistribution, JiffyClient};
    ///
    /// # async fn example(client: &JiffyClient) -> jiffybox::Result<()> {
    /// let created = client
    ///     .create_box_from_distribution(&BoxFromDistribution::new("web1", 10, "ubuntu_24_04_64bit"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_box_from_distribution<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<Value> {
        let body = prepare(params, &["name", "planid", "distribution"])?;
        self.post("jiffyBoxes", &body).await
    }

    /// Create a box from a backup. Requires `name`, `planid` and `backupid`.
    pub async fn create_box_from_backup<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let body = prepare(params, &["name", "planid", "backupid"])?;
        self.post("jiffyBoxes", &body).await
    }

    /// Change the run state of a box: START, SHUTDOWN, PULLPLUG, FREEZE or THAW.
    pub async fn change_box_status<P: Serialize + ?Sized>(
        &self,
        box_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let body = prepare(params, &["status"])?;
        self.put(&format!("jiffyBoxes/{box_id}"), &body).await
    }

    /// Change other box settings such as `name` or `planid`.
    pub async fn update_box<P: Serialize + ?Sized>(
        &self,
        box_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let body = prepare(params, &[])?;
        self.put(&format!("jiffyBoxes/{box_id}"), &body).await
    }

    /// Clone a box into a new one. Requires `name` and `planid`.
    pub async fn duplicate_box<P: Serialize + ?Sized>(
        &self,
        box_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let box_id = numeric_id(box_id)?;
        let body = prepare(params, &["name", "planid"])?;
        self.post(&format!("jiffyBoxes/{box_id}"), &body).await
    }
}
