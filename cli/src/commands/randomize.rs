//! Randomize command - pick a random free port.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::{Color, Print},
    terminal::{Clear, ClearType},
};
use port_randomizer_core::{
    AnimationConfig, AvailabilityProbe, PortSelector, Protocol, SocketProbe,
};
use serde::Serialize;

use super::{paint, Context};

#[derive(Serialize)]
struct SelectedPort {
    protocol: Protocol,
    port: u16,
}

pub async fn run(ctx: &Context, protocol: Protocol) -> Result<()> {
    let selector = PortSelector::new(SocketProbe::new(), ctx.config.selection)?;

    if ctx.json {
        let port = select(&selector, protocol)?;
        let body = SelectedPort { protocol, port };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if ctx.silent || !atty::is(atty::Stream::Stdout) {
        println!("{}", select(&selector, protocol)?);
        return Ok(());
    }

    cycle_decoys(&selector, &ctx.config.animation).await?;
    let port = select(&selector, protocol)?;

    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::CurrentLine), MoveToColumn(0))?;
    println!("{}", paint(port.to_string(), Color::Green));
    stdout.flush()?;
    Ok(())
}

fn select<P: AvailabilityProbe>(selector: &PortSelector<P>, protocol: Protocol) -> Result<u16> {
    selector
        .select(protocol)
        .with_context(|| format!("Could not find a free {} port", protocol.display_name()))
}

/// Flash decoy candidates in place on the current line.
async fn cycle_decoys<P: AvailabilityProbe>(
    selector: &PortSelector<P>,
    animation: &AnimationConfig,
) -> Result<()> {
    let mut stdout = io::stdout();
    let delay = Duration::from_millis(animation.delay_ms);

    for _ in 0..animation.cycles {
        let decoy = selector.draw_candidate()?;
        execute!(
            stdout,
            Clear(ClearType::CurrentLine),
            MoveToColumn(0),
            Print("Randomizing ports: "),
            Print(paint(decoy.to_string(), Color::Red))
        )?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
