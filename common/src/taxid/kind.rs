use std::fmt;
use std::str::FromStr;

/// Which registry a tax id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaxIdKind {
    /// CPF, `XXX.XXX.XXX-XX`.
    Individual,
    /// CNPJ, `XX.XXX.XXX/XXXX-XX`.
    Business,
}

const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Both kinds end with two check digits.
pub const CHECK_DIGITS: usize = 2;

impl TaxIdKind {
    pub const ALL: [TaxIdKind; 2] = [TaxIdKind::Individual, TaxIdKind::Business];

    /// Number of digits in a complete identifier.
    pub const fn len(self) -> usize {
        match self {
            TaxIdKind::Individual => 11,
            TaxIdKind::Business => 14,
        }
    }

    /// Number of digits preceding the check digits.
    pub const fn base_len(self) -> usize {
        self.len() - CHECK_DIGITS
    }

    /// Length of the fully punctuated form.
    pub const fn masked_len(self) -> usize {
        self.len() + self.separators().len()
    }

    /// Punctuation inserted in front of the digit at the given offset.
    pub const fn separators(self) -> &'static [(usize, char)] {
        match self {
            TaxIdKind::Individual => CPF_SEPARATORS,
            TaxIdKind::Business => CNPJ_SEPARATORS,
        }
    }

    pub fn separator_before(self, offset: usize) -> Option<char> {
        self.separators()
            .iter()
            .find(|(at, _)| *at == offset)
            .map(|(_, sep)| *sep)
    }

    /// Guesses the kind from a stripped digit count.
    pub fn from_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.len() == len)
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxIdKind::Individual => f.write_str("CPF"),
            TaxIdKind::Business => f.write_str("CNPJ"),
        }
    }
}

impl FromStr for TaxIdKind {
    type Err = String;

    /// Parses a kind keyword.
    ///
    /// Accepts the registry names ("cpf", "cnpj"), the Brazilian person-type
    /// abbreviations ("pf", "pj") and the English names ("individual", "business"),
    /// all case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" | "pf" | "individual" => Ok(TaxIdKind::Individual),
            "cnpj" | "pj" | "business" => Ok(TaxIdKind::Business),
            _ => Err(format!("invalid tax id kind: {s} (expected cpf or cnpj)")),
        }
    }
}
