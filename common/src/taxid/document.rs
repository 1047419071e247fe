//! # Tax Id Value
//!
//! [`TaxId`] holds the canonical digits of a CPF or CNPJ. Construction only
//! enforces the *shape* (right number of digits for the kind). Checksum
//! validity is recomputed from the digits on every [`TaxId::is_valid`] call,
//! so a value can exist while the user is still fixing a typo.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::checksum;
use super::kind::{CHECK_DIGITS, TaxIdKind};
use super::mask;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TaxIdError {
    #[error("no digits found")]
    Empty,
    #[error("{kind} must have {expected} digits, found {found}")]
    WrongLength {
        kind: TaxIdKind,
        expected: usize,
        found: usize,
    },
    #[error("{found} digits is neither a CPF (11) nor a CNPJ (14)")]
    UnknownLength { found: usize },
    #[error("{kind} base must have {expected} digits, found {found}")]
    WrongBaseLength {
        kind: TaxIdKind,
        expected: usize,
        found: usize,
    },
}

/// Why a correctly shaped tax id fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Defect {
    /// Every digit is the same, a placeholder the registries never issue.
    RepeatedDigits,
    CheckDigitMismatch {
        expected: [u8; CHECK_DIGITS],
        found: [u8; CHECK_DIGITS],
    },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::RepeatedDigits => f.write_str("all digits are identical"),
            Defect::CheckDigitMismatch { expected, found } => write!(
                f,
                "check digits should be {}{}, found {}{}",
                expected[0], expected[1], found[0], found[1]
            ),
        }
    }
}

/// A CPF or CNPJ reduced to its digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaxId {
    kind: TaxIdKind,
    digits: [u8; 14],
}

impl TaxId {
    /// Builds a tax id of a known kind from free-form text.
    pub fn parse(kind: TaxIdKind, input: &str) -> Result<Self, TaxIdError> {
        let stripped = mask::strip(input);
        if stripped.is_empty() {
            return Err(TaxIdError::Empty);
        }
        if stripped.len() != kind.len() {
            return Err(TaxIdError::WrongLength {
                kind,
                expected: kind.len(),
                found: stripped.len(),
            });
        }

        Ok(Self::from_ascii(kind, stripped.as_bytes()))
    }

    /// Appends the check digits to a 9 digit CPF base or a 12 digit CNPJ base.
    pub fn complete(kind: TaxIdKind, base: &str) -> Result<Self, TaxIdError> {
        let stripped = mask::strip(base);
        let base_digits: Vec<u8> = stripped.bytes().map(|b| b - b'0').collect();

        let Some(check) = checksum::check_digits(kind, &base_digits) else {
            return Err(TaxIdError::WrongBaseLength {
                kind,
                expected: kind.base_len(),
                found: base_digits.len(),
            });
        };

        let mut digits = [0u8; 14];
        digits[..kind.base_len()].copy_from_slice(&base_digits);
        digits[kind.base_len()..kind.len()].copy_from_slice(&check);

        Ok(Self { kind, digits })
    }

    fn from_ascii(kind: TaxIdKind, ascii: &[u8]) -> Self {
        let mut digits = [0u8; 14];
        for (slot, byte) in digits.iter_mut().zip(ascii) {
            *slot = byte - b'0';
        }
        Self { kind, digits }
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// Canonical digit-only form, e.g. `"11144477735"`.
    pub fn digits(&self) -> String {
        self.digits[..self.kind.len()]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// The two trailing check digits as typed.
    pub fn check_digits(&self) -> [u8; CHECK_DIGITS] {
        let base_len = self.kind.base_len();
        [self.digits[base_len], self.digits[base_len + 1]]
    }

    /// Punctuated form, e.g. `"111.444.777-35"`.
    pub fn formatted(&self) -> String {
        mask::format(self.kind, &self.digits())
    }

    /// Punctuated form with the identifying digits hidden.
    pub fn redacted(&self) -> String {
        mask::redact(self.kind, &self.digits())
    }

    /// Recomputes the checksum verdict.
    pub fn is_valid(&self) -> bool {
        checksum::validate(self.kind, &self.digits())
    }

    /// Explains a failed validation, `None` for a valid tax id.
    pub fn defect(&self) -> Option<Defect> {
        let digits = &self.digits[..self.kind.len()];
        if checksum::is_repeated(digits) {
            return Some(Defect::RepeatedDigits);
        }

        let expected = checksum::check_digits(self.kind, &digits[..self.kind.base_len()])?;
        let found = self.check_digits();
        (expected != found).then_some(Defect::CheckDigitMismatch { expected, found })
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    /// Parses a tax id, picking the kind from the number of digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.bytes().filter(u8::is_ascii_digit).count();
        if found == 0 {
            return Err(TaxIdError::Empty);
        }

        let kind = TaxIdKind::from_len(found).ok_or(TaxIdError::UnknownLength { found })?;
        Self::parse(kind, s)
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
