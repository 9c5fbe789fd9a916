//! JiffyBox API client library.
//!
//! A thin Rust binding for the JiffyBox cloud server REST API: boxes,
//! backups, plans, distributions, IP addresses, monitoring checks, contact
//! groups and the API's own documentation modules.
//!
//! Every endpoint is one method on [`JiffyClient`] that maps to exactly one
//! HTTP request. Responses are returned as untouched [`serde_json::Value`]s;
//! the library does not model the provider's resource schemas.
//!
//! # Quick Start
//!
//! ```no_run
//! use jiffybox::{BoxFromDistribution, BoxStatus, BoxStatusChange, JiffyClient};
//!
//! #[tokio::main]
//! async fn main() -> jiffybox::Result<()> {
//!     let client = JiffyClient::new("your-api-token")?;
//!
//!     // List all boxes
//!     let boxes = client.list_boxes().await?;
//!     println!("{boxes}");
//!
//!     // Create a box and boot it
//!     let params = BoxFromDistribution::new("web1", 10, "ubuntu_24_04_64bit");
//!     let created = client.create_box_from_distribution(&params).await?;
//!     let id = created["result"]["id"].as_u64().unwrap_or_default();
//!     client
//!         .change_box_status(id, &BoxStatusChange::from(BoxStatus::Start))
//!         .await?;
//!
//!     // Parameters may also be ad-hoc maps
//!     client
//!         .activate_backup(id, &serde_json::json!({"dayid": 1, "timeid": 3}))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Parameter problems are reported as [`JiffyError::Validation`] before any
//! request is sent. A response with any status other than 200 becomes
//! [`JiffyError::ApiError`] carrying the status code and the requested URL.
//! Nothing is retried.
//!
//! # Configuration
//!
//! The client is configured explicitly through [`ClientConfig`]; the
//! library never reads the environment. The API token is embedded in the
//! URL path (`https://api.jiffybox.de/{token}/v1.0/...`).

pub mod cli;
mod client;
mod endpoints;
mod error;
pub mod output;
mod params;
mod validation;

// Re-export core types
pub use client::{BodyEncoding, ClientConfig, JiffyClient};
pub use error::{JiffyError, Result};

// Re-export request bodies
pub use params::{
    BackupSchedule, BoxDuplicate, BoxFromBackup, BoxFromDistribution, BoxStatus,
    BoxStatusChange, ContactGroup, IpMove, MonitorCheck,
};

// Re-export validation helpers
pub use validation::{validate_number, validate_params, NUMERIC_KEYS};
