//! Contact group endpoints.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::numeric_id;
use crate::client::JiffyClient;
use crate::error::Result;
use crate::validation::prepare;

impl JiffyClient {
    /// List all contact groups.
    pub async fn list_contact_groups(&self) -> Result<Value> {
        self.get("contactGroups").await
    }

    /// Get the name and contacts of one group.
    pub async fn contact_group_details(&self, group_id: impl Display) -> Result<Value> {
        let group_id = numeric_id(group_id)?;
        self.get(&format!("contactGroups/{group_id}")).await
    }

    /// Delete a contact group. Checks still notifying it must be changed first.
    pub async fn delete_contact_group(&self, group_id: impl Display) -> Result<Value> {
        let group_id = numeric_id(group_id)?;
        self.delete(&format!("contactGroups/{group_id}")).await
    }

    /// Create a contact group. Requires `name` and `contacts`.
    pub async fn create_contact_group<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let body = prepare(params, &["name", "contacts"])?;
        self.post("contactGroups", &body).await
    }

    /// Replace name and contacts of a group. Requires `name` and `contacts`.
    pub async fn change_contact_group<P: Serialize + ?Sized>(
        &self,
        group_id: impl Display,
        params: &P,
    ) -> Result<Value> {
        let group_id = numeric_id(group_id)?;
        let body = prepare(params, &["name", "contacts"])?;
        self.put(&format!("contactGroups/{group_id}"), &body).await
    }

    /// Copy a group under a new name. Requires `name` and `contacts`.
    pub async fn duplicate_contact_group<P: Serialize + ?Sized>(
        &self,
        source_group: impl Display,
        params: &P,
    ) -> Result<Value> {
        let source_group = numeric_id(source_group)?;
        let body = prepare(params, &["name", "contacts"])?;
        self.post(&format!("contactGroups/{source_group}"), &body)
            .await
    }
}
