//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the jiffybox binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::BoxStatus;

/// JiffyBox API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "jiffybox", about = "JiffyBox API CLI", version)]
pub struct Cli {
    /// Output raw JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Trace requests and responses to stderr.
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// API token.
    #[arg(long, global = true, env = "JIFFYBOX_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API host.
    #[arg(long, global = true, env = "JIFFYBOX_API_HOST", default_value = "api.jiffybox.de")]
    pub host: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources of one kind.
    List {
        /// The kind of resource to list.
        resource: Resource,

        /// Restrict backups or IPs to one box.
        #[arg(long = "box")]
        box_id: Option<String>,
    },

    /// Show one resource.
    Get {
        /// The kind of resource to show.
        resource: Resource,

        /// The resource id (a box id for backups and IPs).
        id: String,
    },

    /// Delete a resource.
    Delete {
        /// The kind of resource to delete.
        resource: Resource,

        /// The resource id (a box id for backups).
        id: String,
    },

    /// Change the run state of a box.
    Status {
        /// The box id.
        box_id: String,

        /// The target state.
        #[arg(ignore_case = true)]
        status: BoxStatus,
    },

    /// Create a new box.
    Create(CreateArgs),

    /// Show the state of a monitoring check, or of all checks on an IP.
    CheckStatus {
        /// A check id or an IP address.
        target: String,
    },
}

/// Arguments for `create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new box.
    #[arg(long)]
    pub name: String,

    /// Plan id.
    #[arg(long)]
    pub plan: u32,

    /// Distribution to install.
    #[arg(long, conflicts_with = "backup", required_unless_present = "backup")]
    pub distribution: Option<String>,

    /// Backup to restore.
    #[arg(long)]
    pub backup: Option<String>,

    /// Install the account's stored SSH key.
    #[arg(long, default_value = "false")]
    pub ssh_key: bool,
}

/// Resource kinds that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// A virtual machine.
    #[value(name = "box", alias = "boxes")]
    JiffyBox,
    /// A box backup.
    #[value(alias = "backups")]
    Backup,
    /// A price and resource tier.
    #[value(alias = "plans")]
    Plan,
    /// An installable OS image.
    #[value(alias = "distributions")]
    Distribution,
    /// An IP address.
    #[value(alias = "ips")]
    Ip,
    /// A monitoring check.
    #[value(alias = "monitors", alias = "monitoring")]
    Monitor,
    /// A contact group for monitoring alerts.
    #[value(alias = "contact-groups")]
    ContactGroup,
    /// An API documentation module.
    #[value(alias = "docs")]
    Doc,
}
