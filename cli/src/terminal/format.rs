use colored::*;
use evento_common::config::Config;
use evento_common::taxid::batch::Inspection;
use evento_common::taxid::{self, TaxId, TaxIdKind};

use crate::terminal::colors;
use crate::terminal::print::Field;

/// Masks raw input, hiding the identifying digits under `--redact`.
pub fn masked_input(kind: TaxIdKind, input: &str, cfg: &Config) -> String {
    if cfg.redact {
        taxid::mask::redact(kind, input)
    } else {
        taxid::format(kind, input)
    }
}

pub fn tax_id_str(tax_id: &TaxId, cfg: &Config) -> String {
    if cfg.redact {
        tax_id.redacted()
    } else {
        tax_id.formatted()
    }
}

pub fn kind_str(kind: TaxIdKind) -> ColoredString {
    kind.to_string().color(colors::KIND)
}

pub fn verdict(valid: bool) -> ColoredString {
    if valid {
        "VALID".color(colors::VALID).bold()
    } else {
        "INVALID".color(colors::INVALID).bold()
    }
}

/// Explains why `input` is not a valid tax id of `kind`.
pub fn invalid_reason(kind: TaxIdKind, input: &str) -> String {
    match TaxId::parse(kind, input) {
        Ok(tax_id) => tax_id
            .defect()
            .map(|defect| defect.to_string())
            .unwrap_or_default(),
        Err(error) => error.to_string(),
    }
}

/// Title shown at the head of a batch entry.
pub fn inspection_title(inspection: &Inspection, cfg: &Config) -> String {
    match (&inspection.tax_id, inspection.formatted()) {
        (Some(tax_id), _) if cfg.redact => tax_id.redacted(),
        (_, Some(formatted)) => formatted,
        (None, None) if cfg.redact => "<redacted>".to_string(),
        _ => inspection.input.clone(),
    }
}

pub fn inspection_fields(inspection: &Inspection) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::new();

    if let Some(kind) = inspection.kind() {
        fields.push(Field::new("Kind", kind_str(kind)));
    }

    fields.push(Field::new("Status", verdict(inspection.valid)));

    if let Some(error) = &inspection.error {
        fields.push(Field::new("Reason", error.to_string()));
    } else if let Some(defect) = inspection.defect() {
        fields.push(Field::new("Reason", defect.to_string()));
    }

    fields
}
