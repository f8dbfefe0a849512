//! Styled one-line messages.
//!
//! Every helper writes to the caller's sink so the menus can be driven
//! against a buffer as easily as against stdout.

use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn banner(out: &mut impl Write, title: &str, subtitle: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::ROCKET, title.style(theme().header.clone()))?;
    writeln!(out, "   {}", subtitle.style(theme().dim.clone()))
}

pub fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "━{}━", title.style(theme().header.clone()))
}

pub fn success(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CHECK, label.style(theme().success.clone()))
}

pub fn error(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CROSS, label.style(theme().error.clone()))
}

pub fn warn(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::WARN, label.style(theme().warn.clone()))
}

pub fn info(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    )
}

pub fn empty(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::EMPTY, label.style(theme().muted.clone()))
}

pub fn summary_row(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", label.style(theme().dim.clone()), value)
}

/// Numbered menu, options starting at 1.
pub fn menu(out: &mut impl Write, title: &str, options: &[&str]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", title.style(theme().header.clone()))?;
    for (i, option) in options.iter().enumerate() {
        let key = format!("{:>2}.", i + 1);
        writeln!(out, "{} {}", key.style(theme().menu_key.clone()), option)?;
    }
    Ok(())
}
