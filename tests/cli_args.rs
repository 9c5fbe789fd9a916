//! CLI argument parsing tests.

use clap::Parser;
use jiffybox::cli::{Cli, Command, Resource};
use jiffybox::BoxStatus;

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["jiffybox", "--token", "t", "list", "boxes"]);

    assert!(!cli.json);
    assert_eq!(cli.token.as_deref(), Some("t"));
    match cli.command {
        Command::List { resource, box_id } => {
            assert_eq!(resource, Resource::JiffyBox);
            assert_eq!(box_id, None);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_backups_for_one_box() {
    let cli = Cli::parse_from(["jiffybox", "list", "backups", "--box", "11"]);

    match cli.command {
        Command::List { resource, box_id } => {
            assert_eq!(resource, Resource::Backup);
            assert_eq!(box_id.as_deref(), Some("11"));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_get_and_delete() {
    let cli = Cli::parse_from(["jiffybox", "get", "box", "11"]);
    match cli.command {
        Command::Get { resource, id } => {
            assert_eq!(resource, Resource::JiffyBox);
            assert_eq!(id, "11");
        }
        _ => panic!("Expected Get command"),
    }

    let cli = Cli::parse_from(["jiffybox", "delete", "monitor", "42"]);
    assert!(matches!(
        cli.command,
        Command::Delete { resource: Resource::Monitor, .. }
    ));
}

#[test]
fn test_status_accepts_any_case() {
    let cli = Cli::parse_from(["jiffybox", "status", "11", "START"]);
    assert!(matches!(
        cli.command,
        Command::Status { status: BoxStatus::Start, .. }
    ));

    let cli = Cli::parse_from(["jiffybox", "status", "11", "pullplug"]);
    assert!(matches!(
        cli.command,
        Command::Status { status: BoxStatus::Pullplug, .. }
    ));
}

#[test]
fn test_create_requires_exactly_one_source() {
    let cli = Cli::parse_from([
        "jiffybox",
        "create",
        "--name",
        "web1",
        "--plan",
        "10",
        "--distribution",
        "debian_12_64bit",
    ]);
    match cli.command {
        Command::Create(args) => {
            assert_eq!(args.name, "web1");
            assert_eq!(args.plan, 10);
            assert_eq!(args.distribution.as_deref(), Some("debian_12_64bit"));
            assert!(!args.ssh_key);
        }
        _ => panic!("Expected Create command"),
    }

    assert!(Cli::try_parse_from(["jiffybox", "create", "--name", "web1", "--plan", "10"]).is_err());
    assert!(Cli::try_parse_from([
        "jiffybox",
        "create",
        "--name",
        "web1",
        "--plan",
        "10",
        "--distribution",
        "debian_12_64bit",
        "--backup",
        "77",
    ])
    .is_err());
}

#[test]
fn test_global_flags() {
    // --json before subcommand
    let cli = Cli::parse_from(["jiffybox", "--json", "list", "plans"]);
    assert!(cli.json);

    // --json and --debug after subcommand (global flags)
    let cli = Cli::parse_from(["jiffybox", "list", "plans", "--json", "--debug"]);
    assert!(cli.json);
    assert!(cli.debug);
}

#[test]
fn test_resource_aliases() {
    for (name, expected) in [
        ("box", Resource::JiffyBox),
        ("boxes", Resource::JiffyBox),
        ("ips", Resource::Ip),
        ("monitoring", Resource::Monitor),
        ("contact-group", Resource::ContactGroup),
        ("contact-groups", Resource::ContactGroup),
        ("docs", Resource::Doc),
    ] {
        let cli = Cli::parse_from(["jiffybox", "list", name]);
        match cli.command {
            Command::List { resource, .. } => assert_eq!(resource, expected, "{name}"),
            _ => panic!("Expected List command"),
        }
    }
}

#[test]
fn test_check_status_target() {
    let cli = Cli::parse_from(["jiffybox", "check-status", "192.0.2.10"]);
    match cli.command {
        Command::CheckStatus { target } => assert_eq!(target, "192.0.2.10"),
        _ => panic!("Expected CheckStatus command"),
    }
}
