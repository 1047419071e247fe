//! # Check Digit Validation
//!
//! Both registries append two check digits computed with a weighted sum
//! modulo 11. The second digit is computed over the base *and* the first
//! check digit.
//!
//! * **CPF**: weights count down to 2 from `len + 1`. The digit is
//!   `(sum * 10) % 11`, with 10 folded to 0.
//! * **CNPJ**: weights cycle `2..=9` walking from the rightmost digit. The digit
//!   is 0 when `sum % 11 < 2`, otherwise `11 - sum % 11`.

use super::kind::{CHECK_DIGITS, TaxIdKind};

/// Enough room for the longest identifier.
const MAX_DIGITS: usize = 14;

/// Checks that `input` is a complete, well-formed identifier of the given kind.
///
/// Formatting characters are stripped first. Returns `false` for wrong length,
/// repeated-digit placeholders (`000.000.000-00`) and checksum mismatches. Never
/// fails: partial input simply is not valid yet.
pub fn validate(kind: TaxIdKind, input: &str) -> bool {
    let Some(digits) = collect_digits(input, kind.len()) else {
        return false;
    };
    let digits = &digits[..kind.len()];

    if is_repeated(digits) {
        return false;
    }

    let (base, check) = digits.split_at(kind.base_len());
    check_digits(kind, base).is_some_and(|expected| expected == check)
}

/// Computes both check digits for a base of `kind.base_len()` digits.
///
/// Returns `None` if `base` has the wrong length or holds a value above 9.
pub fn check_digits(kind: TaxIdKind, base: &[u8]) -> Option<[u8; CHECK_DIGITS]> {
    if base.len() != kind.base_len() || base.iter().any(|d| *d > 9) {
        return None;
    }

    let mut buffer = [0u8; MAX_DIGITS];
    buffer[..base.len()].copy_from_slice(base);

    let first = check_digit(kind, &buffer[..base.len()]);
    buffer[base.len()] = first;
    let second = check_digit(kind, &buffer[..=base.len()]);

    Some([first, second])
}

/// True when every digit is the same, which the registries never issue.
pub fn is_repeated(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((head, tail)) => tail.iter().all(|d| d == head),
        None => false,
    }
}

fn check_digit(kind: TaxIdKind, digits: &[u8]) -> u8 {
    match kind {
        TaxIdKind::Individual => cpf_check_digit(digits),
        TaxIdKind::Business => cnpj_check_digit(digits),
    }
}

fn cpf_check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, d)| u32::from(*d) * (top_weight - idx as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder as u8,
    }
}

fn cnpj_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(d, weight)| u32::from(*d) * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// Reads the ASCII digits of `input` as numbers.
///
/// Returns `None` unless there are exactly `expected` of them.
fn collect_digits(input: &str, expected: usize) -> Option<[u8; MAX_DIGITS]> {
    let mut digits = [0u8; MAX_DIGITS];
    let mut count = 0;

    for byte in input.bytes().filter(u8::is_ascii_digit) {
        if count == expected {
            return None;
        }
        digits[count] = byte - b'0';
        count += 1;
    }

    (count == expected).then_some(digits)
}
