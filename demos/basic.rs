//! Basic example demonstrating the JiffyBox API client.
//!
//! Run with:
//! ```
//! JIFFYBOX_API_TOKEN=your-token cargo run --example basic
//! ```

use jiffybox::{ClientConfig, JiffyClient};

#[tokio::main]
async fn main() -> jiffybox::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // The library takes the token explicitly; reading it is the caller's job
    let token = std::env::var("JIFFYBOX_API_TOKEN").unwrap_or_default();
    let client = JiffyClient::with_config(ClientConfig::new(token).with_debug(true))?;

    println!("--- Plans ---");
    let plans = client.list_plans().await?;
    if let Some(plans) = plans["result"].as_object() {
        for (id, plan) in plans {
            println!(
                "  {id}: {} ({} MB RAM, {} CPUs)",
                plan["name"].as_str().unwrap_or("?"),
                plan["ramInMB"],
                plan["cpus"]
            );
        }
    }

    println!("\n--- Boxes ---");
    let boxes = client.list_boxes().await?;
    let Some(boxes) = boxes["result"].as_object() else {
        println!("  none");
        return Ok(());
    };

    for (id, jiffy_box) in boxes {
        println!(
            "  {id}: {} [{}]",
            jiffy_box["name"].as_str().unwrap_or("?"),
            jiffy_box["status"].as_str().unwrap_or("?")
        );
    }

    // Show backups and IPs of the first box
    if let Some(id) = boxes.keys().next() {
        println!("\n--- Backups of box {id} ---");
        let backups = client.list_box_backups(id).await?;
        println!("{}", serde_json::to_string_pretty(&backups["result"])?);

        println!("\n--- IPs of box {id} ---");
        let ips = client.box_ips(id).await?;
        println!("{}", serde_json::to_string_pretty(&ips["result"])?);
    }

    Ok(())
}
