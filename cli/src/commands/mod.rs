//! Subcommand implementations.

pub mod list;
pub mod randomize;
pub mod well_known;

use crossterm::style::{Color, Stylize};
use port_randomizer_core::{Config, Protocol};

/// Settings shared by every subcommand.
pub struct Context {
    pub config: Config,
    pub silent: bool,
    pub json: bool,
}

/// Color `text` when stdout is a terminal.
pub fn paint(text: impl Into<String>, color: Color) -> String {
    let text = text.into();
    if atty::is(atty::Stream::Stdout) {
        text.with(color).to_string()
    } else {
        text
    }
}

/// Red for TCP, green for UDP.
pub fn protocol_color(protocol: Protocol) -> Color {
    match protocol {
        Protocol::Tcp => Color::Red,
        Protocol::Udp => Color::Green,
    }
}
