//! JiffyBox API CLI binary.
//!
//! A command-line interface for interacting with the JiffyBox API.

use clap::Parser;
use jiffybox::cli::{Cli, Command, CreateArgs, Resource};
use jiffybox::output::render;
use jiffybox::{
    validate_number, BoxFromBackup, BoxFromDistribution, BoxStatusChange, ClientConfig,
    JiffyClient, JiffyError,
};
use serde_json::Value;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ClientConfig::new(cli.token.clone().unwrap_or_default())
        .with_host(cli.host.clone())
        .with_debug(cli.debug);

    let client = match JiffyClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set JIFFYBOX_API_TOKEN or pass --token");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(response) => {
            println!("{}", render(&response, cli.json));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &JiffyClient, command: Command) -> jiffybox::Result<Value> {
    match command {
        Command::List { resource, box_id } => handle_list(client, resource, box_id.as_deref()).await,
        Command::Get { resource, id } => handle_get(client, resource, &id).await,
        Command::Delete { resource, id } => handle_delete(client, resource, &id).await,
        Command::Status { box_id, status } => {
            client
                .change_box_status(&box_id, &BoxStatusChange::from(status))
                .await
        }
        Command::Create(args) => handle_create(client, args).await,
        Command::CheckStatus { target } => {
            if validate_number(&target).is_ok() {
                client.monitor_status(&target).await
            } else {
                client.ip_monitor_statuses(&target).await
            }
        }
    }
}

async fn handle_list(
    client: &JiffyClient,
    resource: Resource,
    box_id: Option<&str>,
) -> jiffybox::Result<Value> {
    match (resource, box_id) {
        (Resource::JiffyBox, _) => client.list_boxes().await,
        (Resource::Backup, Some(id)) => client.list_box_backups(id).await,
        (Resource::Backup, None) => client.list_backups().await,
        (Resource::Plan, _) => client.list_plans().await,
        (Resource::Distribution, _) => client.list_distributions().await,
        (Resource::Ip, Some(id)) => client.box_ips(id).await,
        (Resource::Ip, None) => client.list_ips().await,
        (Resource::Monitor, _) => client.list_monitors().await,
        (Resource::ContactGroup, _) => client.list_contact_groups().await,
        (Resource::Doc, _) => client.list_doc_modules().await,
    }
}

async fn handle_get(client: &JiffyClient, resource: Resource, id: &str) -> jiffybox::Result<Value> {
    match resource {
        Resource::JiffyBox => client.box_details(id).await,
        Resource::Backup => client.list_box_backups(id).await,
        Resource::Plan => client.plan_details(id).await,
        Resource::Distribution => client.distribution_details(id).await,
        Resource::Ip => client.box_ips(id).await,
        Resource::Monitor => client.monitor_details(id).await,
        Resource::ContactGroup => client.contact_group_details(id).await,
        Resource::Doc => client.doc_module(id).await,
    }
}

async fn handle_delete(
    client: &JiffyClient,
    resource: Resource,
    id: &str,
) -> jiffybox::Result<Value> {
    match resource {
        Resource::JiffyBox => client.delete_box(id).await,
        Resource::Backup => client.deactivate_box_backups(id).await,
        Resource::Monitor => client.delete_monitor(id).await,
        Resource::ContactGroup => client.delete_contact_group(id).await,
        other => {
            eprintln!("Hint: Only boxes, backups, monitors and contact groups can be deleted");
            Err(JiffyError::Validation(format!(
                "{other:?} resources cannot be deleted"
            )))
        }
    }
}

async fn handle_create(client: &JiffyClient, args: CreateArgs) -> jiffybox::Result<Value> {
    let use_sshkey = args.ssh_key.then_some(true);

    match (args.distribution, args.backup) {
        (Some(distribution), _) => {
            let mut params = BoxFromDistribution::new(args.name, args.plan, distribution);
            params.use_sshkey = use_sshkey;
            client.create_box_from_distribution(&params).await
        }
        (None, Some(backup)) => {
            let mut params = BoxFromBackup::new(args.name, args.plan, backup);
            params.use_sshkey = use_sshkey;
            client.create_box_from_backup(&params).await
        }
        (None, None) => Err(JiffyError::Validation(
            "either --distribution or --backup is required".to_string(),
        )),
    }
}
