//! Check-well-known command - sample a reserved port.

use anyhow::Result;
use port_randomizer_core::{PortSelector, SocketProbe};
use serde_json::json;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let selector = PortSelector::new(SocketProbe::new(), ctx.config.selection)?;
    let port = selector.sample_well_known();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "port": port }))?);
    } else {
        println!("Checking well-known port: {}", port);
    }
    Ok(())
}
