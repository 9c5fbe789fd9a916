//! Read-only catalog endpoints: plans, distributions and API documentation.

use std::fmt::Display;

use serde_json::Value;

use super::segment;
use crate::client::JiffyClient;
use crate::error::Result;

impl JiffyClient {
    /// List all plans (price and resource tiers).
    pub async fn list_plans(&self) -> Result<Value> {
        self.get("plans").await
    }

    /// Get one plan, addressed by id or by name.
    pub async fn plan_details(&self, plan: impl Display) -> Result<Value> {
        let plan = segment(plan)?;
        self.get(&format!("plans/{plan}")).await
    }

    /// List all installable distributions.
    pub async fn list_distributions(&self) -> Result<Value> {
        self.get("distributions").await
    }

    /// Get one distribution by its key, e.g. `debian_12_64bit`.
    pub async fn distribution_details(&self, distribution: &str) -> Result<Value> {
        let distribution = segment(distribution)?;
        self.get(&format!("distributions/{distribution}")).await
    }

    /// List the modules of the self-describing API documentation.
    pub async fn list_doc_modules(&self) -> Result<Value> {
        self.get("doc").await
    }

    /// Get the documentation of one module.
    pub async fn doc_module(&self, module: &str) -> Result<Value> {
        let module = segment(module)?;
        self.get(&format!("doc/{module}")).await
    }
}
