use evento_common::taxid::{self, Defect, TaxId, TaxIdKind};

const CPF: TaxIdKind = TaxIdKind::Individual;
const CNPJ: TaxIdKind = TaxIdKind::Business;

/*************************************************************
                     Known registry numbers
**************************************************************/

const VALID_CPFS: &[&str] = &[
    "11144477735",
    "52998224725",
    // first check digit folds 10 into 0
    "12345678909",
];

const VALID_CNPJS: &[&str] = &["11222333000181", "11444777000161"];

#[test]
fn valid_cpfs_pass_raw_and_masked() {
    for cpf in VALID_CPFS {
        assert!(taxid::validate(CPF, cpf), "{cpf}");
        assert!(taxid::validate(CPF, &taxid::format(CPF, cpf)), "{cpf}");
    }
}

#[test]
fn valid_cnpjs_pass_raw_and_masked() {
    for cnpj in VALID_CNPJS {
        assert!(taxid::validate(CNPJ, cnpj), "{cnpj}");
        assert!(taxid::validate(CNPJ, &taxid::format(CNPJ, cnpj)), "{cnpj}");
    }
}

#[test]
fn corrupted_check_digit_fails() {
    assert!(!taxid::validate(CPF, "11144477736"));
    assert!(!taxid::validate(CNPJ, "11222333000180"));
}

#[test]
fn placeholder_fails_before_checksum() {
    assert!(!taxid::validate(CPF, "00000000000"));
    assert!(!taxid::validate(CPF, "111.111.111-11"));
    assert!(!taxid::validate(CNPJ, "00.000.000/0000-00"));

    let placeholder: TaxId = "00000000000".parse().unwrap();
    assert_eq!(placeholder.defect(), Some(Defect::RepeatedDigits));
}

#[test]
fn kind_mismatch_fails() {
    assert!(!taxid::validate(CNPJ, VALID_CPFS[0]));
    assert!(!taxid::validate(CPF, VALID_CNPJS[0]));
}

#[test]
fn partial_input_never_validates() {
    let full = "111.444.777-35";
    for end in 0..full.len() {
        let partial = &full[..end];
        assert!(!taxid::validate(CPF, partial), "{partial}");
    }
}

/*************************************************************
                        Masked forms
**************************************************************/

#[test]
fn masks_match_registry_layout() {
    assert_eq!(taxid::format(CPF, "11144477735"), "111.444.777-35");
    assert_eq!(taxid::format(CNPJ, "11222333000181"), "11.222.333/0001-81");
}

#[test]
fn typing_one_digit_at_a_time() {
    let typed = "11222333000181";
    let expected = [
        "1",
        "11",
        "11.2",
        "11.22",
        "11.222",
        "11.222.3",
        "11.222.33",
        "11.222.333",
        "11.222.333/0",
        "11.222.333/00",
        "11.222.333/000",
        "11.222.333/0001",
        "11.222.333/0001-8",
        "11.222.333/0001-81",
    ];

    let mut field = String::new();
    for (digit, want) in typed.chars().zip(expected) {
        field.push(digit);
        field = taxid::format(CNPJ, &field);
        assert_eq!(field, want);
    }
}

#[test]
fn reformatting_noisy_input_is_stable() {
    for input in ["CPF: 111abc444 / 777-35", "١١١.٤٤٤ 12.x3", "ß11.222é333/0001-81ü"] {
        for kind in [CPF, CNPJ] {
            let once = taxid::format(kind, input);
            assert_eq!(taxid::format(kind, &once), once, "{input}");
        }
    }
}

/*************************************************************
                         Tax id values
**************************************************************/

#[test]
fn complete_matches_known_numbers() {
    for cpf in VALID_CPFS {
        let completed = TaxId::complete(CPF, &cpf[..9]).unwrap();
        assert_eq!(completed.digits(), *cpf);
    }
    for cnpj in VALID_CNPJS {
        let completed = TaxId::complete(CNPJ, &cnpj[..12]).unwrap();
        assert_eq!(completed.digits(), *cnpj);
    }
}

#[test]
fn parsed_value_round_trips_through_display() {
    let cnpj: TaxId = "11222333000181".parse().unwrap();
    let again: TaxId = cnpj.to_string().parse().unwrap();
    assert_eq!(cnpj, again);
}
