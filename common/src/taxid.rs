//! # Brazilian Tax Identifiers
//!
//! Parsing, masking and validation of the two national registry numbers:
//! * **CPF** (*Cadastro de Pessoas Físicas*): 11 digits, issued to individuals.
//! * **CNPJ** (*Cadastro Nacional da Pessoa Jurídica*): 14 digits, issued to businesses.
//!
//! Both embed two trailing check digits computed with a weighted modulo-11 sum.
//!
//! The free functions [`format`] and [`validate`] work on raw user text and never
//! fail, so they can run on every keystroke of a form input. [`TaxId`] is the typed
//! value for callers that want shape errors reported instead.

pub mod batch;
pub mod checksum;
pub mod document;
pub mod kind;
pub mod mask;

pub use checksum::validate;
pub use document::{Defect, TaxId, TaxIdError};
pub use kind::TaxIdKind;
pub use mask::format;
