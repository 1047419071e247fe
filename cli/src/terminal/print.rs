//! Terminal output.
//!
//! Every line is a `tracing` event on [`PRINT_TARGET`], so reports and log
//! messages share one subscriber and reports survive the `-q` filters.

use colored::*;
use evento_common::config::Config;
use evento_common::macros::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const WIDTH: usize = 64;

const BANNER: &str = r#"
       ___ __   __ ___  _  _  _____  ___      _
      | __|\ \ / /| __|| \| ||_   _|/ _ \   _| |_
      | _|  \ V / | _| | .` |  | | | (_) | |_   _|
      |___|  \_/  |___||_|\_|  |_|  \___/    |_|
"#;

/// One labelled value of a tax id report, e.g. `Kind: CPF`.
pub struct Field {
    label: &'static str,
    value: ColoredString,
}

impl Field {
    pub fn new(label: &'static str, value: impl Into<ColoredString>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    line("");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!(" EVENTO+ TAX ID v{} ", env!("CARGO_PKG_VERSION"));
    line(&titled_rule(&title, '═'));
    line(&BANNER.truecolor(0, 156, 59).to_string());
}

/// Opens a command's output with its name centered in a thin rule.
pub fn section(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    line(&titled_rule(&format!(" {} ", title.to_uppercase()), '─'));
}

pub fn closing_rule(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    line(&"═".repeat(WIDTH).color(colors::SEPARATOR).to_string());
}

/// `──── TITLE ────` spanning [`WIDTH`] columns.
fn titled_rule(title: &str, fill: char) -> String {
    let padding: usize = WIDTH.saturating_sub(UnicodeWidthStr::width(title));
    let left: String = fill.to_string().repeat(padding / 2);
    let right: String = fill.to_string().repeat(padding - padding / 2);

    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green().bold(),
        right.color(colors::SEPARATOR)
    )
}

fn label_width(fields: &[Field]) -> usize {
    fields.iter().map(|field| field.label.len()).max().unwrap_or(0)
}

/// Prints `> Label...: value` lines with the colons lined up.
pub fn fields(fields: &[Field]) {
    let width: usize = label_width(fields);
    for field in fields {
        let dots: String = ".".repeat(width + 1 - field.label.len());
        line(&format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            field.label.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            field.value
        ));
    }
}

/// Prints one numbered tax id of a batch with its fields hanging below it.
pub fn entry(idx: usize, title: &str, fields: &[Field]) {
    line(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));

    let width: usize = label_width(fields);
    for (i, field) in fields.iter().enumerate() {
        let branch: &str = if i + 1 == fields.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(width + 1 - field.label.len());
        line(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            field.label.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            field.value
        ));
    }
}

/// Closing line of a batch.
///
/// Centered under a rule at full verbosity, a plain line under `-q`, dropped
/// under `-qq`.
pub fn summary(msg: &str, cfg: &Config) {
    match cfg.quiet {
        0 => {
            line(&"═".repeat(WIDTH).color(colors::SEPARATOR).to_string());
            let indent: usize = WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
            line(&format!("{}{}", " ".repeat(indent), msg));
        }
        1 => line(msg),
        _ => {}
    }
}
