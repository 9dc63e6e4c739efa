//! List-active command - show ports currently bound.

use anyhow::{Context as _, Result};
use port_randomizer_core::{Protocol, SocketEnumerator, UsageLister};
use serde_json::json;

use super::{paint, protocol_color, Context};

const USAGE: &str =
    "Please specify a flag (-t for TCP, -u for UDP, -a for all) for listing used ports.";

/// Which ports to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Single(Protocol),
    All,
}

pub async fn run(ctx: &Context, mode: Option<ListMode>) -> Result<()> {
    let Some(mode) = mode else {
        println!("{}", USAGE);
        return Ok(());
    };

    let lister = UsageLister::new(SocketEnumerator::from_config(&ctx.config.enumerator)?);

    match mode {
        ListMode::Single(protocol) => list_single(&lister, protocol, ctx.json).await,
        ListMode::All => list_all(&lister, ctx.json).await,
    }
}

async fn list_single(
    lister: &UsageLister<SocketEnumerator>,
    protocol: Protocol,
    json: bool,
) -> Result<()> {
    let ports = lister
        .list_used_ports(protocol)
        .await
        .with_context(|| format!("Error listing used {} ports", protocol.display_name()))?;

    if json {
        let body = json!({ "protocol": protocol, "ports": ports });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Listing used {} ports:", protocol);
    let color = protocol_color(protocol);
    for port in &ports {
        println!("{}", paint(port.to_string(), color));
    }
    println!();
    Ok(())
}

async fn list_all(lister: &UsageLister<SocketEnumerator>, json: bool) -> Result<()> {
    let rows = lister
        .list_all()
        .await
        .context("Error listing used ports")?;

    if json {
        let tcp: Vec<u16> = rows.iter().filter_map(|row| row.tcp).collect();
        let udp: Vec<u16> = rows.iter().filter_map(|row| row.udp).collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "tcp": tcp, "udp": udp }))?);
        return Ok(());
    }

    println!("Listing all used ports:");
    println!("TCP Ports\t\tUDP Ports:");
    for row in &rows {
        let tcp = row.tcp.map(|p| p.to_string()).unwrap_or_default();
        let udp = row.udp.map(|p| p.to_string()).unwrap_or_default();
        println!(
            "{}\t\t\t{}",
            paint(tcp, protocol_color(Protocol::Tcp)),
            paint(udp, protocol_color(Protocol::Udp))
        );
    }
    Ok(())
}
