use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use evento_common::config::Config;
use evento_common::taxid::batch::{self, Inspection};

use crate::terminal::{colors, format, print};

/// Checks every tax id given on the command line or in `file`.
///
/// Returns `true` only when all of them are valid.
pub fn check(inputs: &[String], file: Option<PathBuf>, cfg: &Config) -> anyhow::Result<bool> {
    let mut targets: Vec<String> = inputs.iter().flat_map(|s| batch::split_list(s)).collect();

    if let Some(path) = file {
        let content: String = fs::read_to_string(&path)
            .with_context(|| format!("failed to read tax ids from {}", path.display()))?;
        targets.extend(batch::split_list(&content));
    }

    if targets.is_empty() {
        anyhow::bail!("no tax ids given, pass them as arguments or with --file");
    }

    let start_time: Instant = Instant::now();
    let inspections: Vec<Inspection> = batch::inspect_all(&targets);

    print::section("inspection results", cfg);
    print_inspections(&inspections, cfg);
    print_summary(&inspections, start_time.elapsed(), cfg);

    Ok(inspections.iter().all(|inspection| inspection.valid))
}

fn print_inspections(inspections: &[Inspection], cfg: &Config) {
    for (idx, inspection) in inspections.iter().enumerate() {
        let title: String = format::inspection_title(inspection, cfg);
        if cfg.quiet > 1 {
            print::line(&format!("{} {}", format::verdict(inspection.valid), title));
            continue;
        }

        print::entry(idx, &title, &format::inspection_fields(inspection));
        if idx + 1 != inspections.len() {
            print::blank();
        }
    }
}

fn print_summary(inspections: &[Inspection], total_time: Duration, cfg: &Config) {
    let valid: usize = inspections.iter().filter(|i| i.valid).count();
    let invalid: usize = inspections.len() - valid;

    let valid_str: ColoredString = format!("{valid} valid").bold().color(colors::VALID);
    let invalid_str: ColoredString = format!("{invalid} invalid").bold().color(colors::INVALID);
    let total_time: ColoredString = format!("{:.3}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Check Complete: {valid_str}, {invalid_str} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::summary(&output.to_string(), cfg);
}
