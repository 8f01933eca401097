// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(color(colors::codes::HEADER))
        .usage(color(colors::codes::HEADER))
        .literal(color(colors::codes::LITERAL))
        .placeholder(color(colors::codes::CONTEXT))
        .valid(color(colors::codes::CONTEXT))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  finetrack init                                   Keep fines on this machine
  finetrack init --mode hybrid --url <url>         Sync with a fine service
  finetrack add parking \"High St\" -a 60 --due 2025-01-10
                                                   Record a fine
  finetrack list --overdue                         List fines past their due date
  finetrack pay <id>                               Mark a fine as paid",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
