use colored::*;
use evento_common::config::Config;
use evento_common::taxid::{TaxIdKind, mask};
use evento_common::warn;

use crate::terminal::print::{self, Field};
use crate::terminal::{colors, format};

pub fn format(kind: TaxIdKind, input: &str, cfg: &Config) -> anyhow::Result<()> {
    let masked: String = format::masked_input(kind, input, cfg);
    let digit_count: usize = mask::strip(input).len();

    if cfg.quiet > 1 {
        print::line(&masked);
        return Ok(());
    }

    print::fields(&[
        Field::new("Kind", format::kind_str(kind)),
        Field::new("Digits", format!("{}/{}", digit_count.min(kind.len()), kind.len())),
        Field::new("Masked", masked.color(colors::TAX_ID).bold()),
    ]);

    if digit_count < kind.len() {
        warn!("{} digits missing for a complete {kind}", kind.len() - digit_count);
    } else if digit_count > kind.len() {
        warn!("{} extra digits were dropped", digit_count - kind.len());
    }

    Ok(())
}
