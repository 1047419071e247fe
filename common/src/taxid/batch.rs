//! # Batch Inspection
//!
//! Checks many tax ids at once, auto-detecting each kind from its digit count.
//! Validation holds no shared state, so inputs are fanned out over the rayon
//! pool and gathered back in input order.

use rayon::prelude::*;

use super::document::{Defect, TaxId, TaxIdError};
use super::kind::TaxIdKind;
use crate::{success, warn};

/// Outcome of checking a single input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inspection {
    /// The text exactly as it was supplied.
    pub input: String,
    /// The parsed value, when the input had the shape of a CPF or CNPJ.
    pub tax_id: Option<TaxId>,
    pub valid: bool,
    /// Why the input could not be parsed.
    pub error: Option<TaxIdError>,
}

impl Inspection {
    pub fn kind(&self) -> Option<TaxIdKind> {
        self.tax_id.map(|tax_id| tax_id.kind())
    }

    /// Punctuated form of the parsed value.
    pub fn formatted(&self) -> Option<String> {
        self.tax_id.map(|tax_id| tax_id.formatted())
    }

    /// Checksum problem of a parsed but invalid value.
    pub fn defect(&self) -> Option<Defect> {
        self.tax_id.and_then(|tax_id| tax_id.defect())
    }
}

/// Splits a list of tax ids separated by commas, semicolons or whitespace.
///
/// Punctuation inside a tax id (`.`, `/`, `-`) is left alone.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Checks a single input.
pub fn inspect(input: &str) -> Inspection {
    match input.parse::<TaxId>() {
        Ok(tax_id) => Inspection {
            input: input.to_string(),
            tax_id: Some(tax_id),
            valid: tax_id.is_valid(),
            error: None,
        },
        Err(error) => Inspection {
            input: input.to_string(),
            tax_id: None,
            valid: false,
            error: Some(error),
        },
    }
}

/// Checks every input, keeping the original order.
pub fn inspect_all<S>(inputs: &[S]) -> Vec<Inspection>
where
    S: AsRef<str> + Sync,
{
    let inspections: Vec<Inspection> = inputs
        .par_iter()
        .map(|input| inspect(input.as_ref()))
        .collect();

    let valid = inspections.iter().filter(|i| i.valid).count();
    let invalid = inspections.len() - valid;
    let unit: &str = if inspections.len() == 1 { "tax id" } else { "tax ids" };

    if invalid == 0 {
        success!("{} {unit} checked, all valid", inspections.len());
    } else {
        warn!("{} {unit} checked, {invalid} invalid", inspections.len());
    }

    inspections
}
