//! Properties that must hold for arbitrary user input.

use evento_common::taxid::{self, Defect, TaxId, TaxIdKind};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = TaxIdKind> {
    prop_oneof![Just(TaxIdKind::Individual), Just(TaxIdKind::Business)]
}

fn punctuation(kind: TaxIdKind) -> Vec<char> {
    kind.separators().iter().map(|(_, sep)| *sep).collect()
}

proptest! {
    #[test]
    fn format_only_emits_digits_and_kind_punctuation(kind in any_kind(), input in "\\PC*") {
        let masked = taxid::format(kind, &input);
        let allowed = punctuation(kind);

        prop_assert!(masked.chars().all(|c| c.is_ascii_digit() || allowed.contains(&c)));
        prop_assert!(masked.len() <= kind.masked_len());
    }

    #[test]
    fn format_is_stable_on_its_own_output(kind in any_kind(), input in "\\PC*") {
        let once = taxid::format(kind, &input);
        let twice = taxid::format(kind, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn validate_is_deterministic(kind in any_kind(), input in "\\PC{0,20}") {
        prop_assert_eq!(taxid::validate(kind, &input), taxid::validate(kind, &input));
    }

    #[test]
    fn validate_ignores_the_mask(kind in any_kind(), digits in "[0-9]{11,14}") {
        let masked = taxid::format(kind, &digits);
        if digits.len() == kind.len() {
            prop_assert_eq!(taxid::validate(kind, &digits), taxid::validate(kind, &masked));
        }
    }

    #[test]
    fn wrong_length_is_never_valid(kind in any_kind(), digits in "[0-9]{0,20}") {
        prop_assume!(digits.len() != kind.len());
        prop_assert!(!taxid::validate(kind, &digits));
    }

    #[test]
    fn completed_ids_validate(base in "[0-9]{9}") {
        let tax_id = TaxId::complete(TaxIdKind::Individual, &base).unwrap();
        prop_assert!(tax_id.is_valid() || tax_id.defect() == Some(Defect::RepeatedDigits));
    }

    #[test]
    fn completed_cnpjs_validate(base in "[0-9]{12}") {
        let tax_id = TaxId::complete(TaxIdKind::Business, &base).unwrap();
        prop_assert!(tax_id.is_valid() || tax_id.defect() == Some(Defect::RepeatedDigits));
    }

    #[test]
    fn digit_count_picks_the_kind(digits in "[0-9]{11}|[0-9]{14}") {
        let tax_id: TaxId = digits.parse().unwrap();
        prop_assert_eq!(tax_id.kind().len(), digits.len());
        prop_assert_eq!(tax_id.is_valid(), taxid::validate(tax_id.kind(), &digits));
    }
}
