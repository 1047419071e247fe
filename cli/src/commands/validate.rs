use colored::*;
use evento_common::config::Config;
use evento_common::taxid::{self, TaxIdKind};

use crate::terminal::print::{self, Field};
use crate::terminal::{colors, format};

/// Prints the verdict for a single tax id and returns it.
pub fn validate(kind: TaxIdKind, input: &str, cfg: &Config) -> anyhow::Result<bool> {
    let valid: bool = taxid::validate(kind, input);

    if cfg.quiet > 1 {
        print::line(&format::verdict(valid).to_string());
        return Ok(valid);
    }

    let mut fields: Vec<Field> = vec![
        Field::new("Kind", format::kind_str(kind)),
        Field::new("Number", format::masked_input(kind, input, cfg).color(colors::TAX_ID)),
        Field::new("Status", format::verdict(valid)),
    ];
    if !valid {
        fields.push(Field::new("Reason", format::invalid_reason(kind, input)));
    }
    print::fields(&fields);

    Ok(valid)
}
