use colored::*;
use evento_common::config::Config;
use evento_common::success;
use evento_common::taxid::{TaxId, TaxIdKind};

use crate::terminal::print::{self, Field};
use crate::terminal::{colors, format};

pub fn complete(kind: TaxIdKind, base: &str, cfg: &Config) -> anyhow::Result<()> {
    let tax_id: TaxId = TaxId::complete(kind, base)?;
    let shown: String = format::tax_id_str(&tax_id, cfg);

    if cfg.quiet > 1 {
        print::line(&shown);
        return Ok(());
    }

    let [first, second] = tax_id.check_digits();
    print::fields(&[
        Field::new("Kind", format::kind_str(kind)),
        Field::new("Check", format!("{first}{second}").color(colors::ACCENT)),
        Field::new("Number", shown.color(colors::TAX_ID).bold()),
    ]);

    success!("{kind} completed");
    Ok(())
}
