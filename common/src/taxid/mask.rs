//! # Display Masks
//!
//! Progressive punctuation for CPF/CNPJ input fields.
//!
//! Everything that is not an ASCII digit is discarded first, then the
//! separators of the kind are put back in front of the digits they precede.
//! Because the input is stripped before masking, the output of [`format`]
//! can be fed back into it and comes out unchanged.

use super::kind::TaxIdKind;

const REDACTED: char = '*';

/// Keeps only the ASCII digits of `input`.
pub fn strip(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Masks `input` as far as its digits go.
///
/// * `"111444"` with [`TaxIdKind::Individual`] gives `"111.444"`.
/// * `"11222333000181"` with [`TaxIdKind::Business`] gives `"11.222.333/0001-81"`.
///
/// A separator is only written once the digit after it has been typed, and
/// digits past the full length of the kind are dropped.
pub fn format(kind: TaxIdKind, input: &str) -> String {
    mask_digits(kind, input, |_, digit| digit)
}

/// Like [`format`] but hides every digit outside the middle block.
///
/// CPF keeps digits 4 to 9 (`***.444.777-**`), CNPJ keeps digits 3 to 8
/// (`**.222.333/****-**`).
pub fn redact(kind: TaxIdKind, input: &str) -> String {
    let visible = visible_window(kind);
    mask_digits(kind, input, |offset, digit| {
        if visible.contains(&offset) { digit } else { REDACTED }
    })
}

fn visible_window(kind: TaxIdKind) -> std::ops::Range<usize> {
    match kind {
        TaxIdKind::Individual => 3..9,
        TaxIdKind::Business => 2..8,
    }
}

fn mask_digits<F>(kind: TaxIdKind, input: &str, render: F) -> String
where
    F: Fn(usize, char) -> char,
{
    let mut masked = String::with_capacity(kind.masked_len());

    let digits = input.chars().filter(char::is_ascii_digit).take(kind.len());
    for (offset, digit) in digits.enumerate() {
        if let Some(sep) = kind.separator_before(offset) {
            masked.push(sep);
        }
        masked.push(render(offset, digit));
    }

    masked
}
