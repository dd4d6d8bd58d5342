use proptest::prelude::*;
use regform::enums::FieldId;
use regform::rules::RuleTable;

fn passes(field: FieldId, value: &str) -> bool {
    RuleTable::standard().get(field).unwrap().test(value)
}

/// Strategy for passwords built from one of each required class plus filler.
fn arb_password() -> impl Strategy<Value = String> {
    (
        "[a-z]",
        "[A-Z]",
        "[0-9]",
        "[@$!%*?&]",
        "[A-Za-z0-9@$!%*?&]{4,12}",
    )
        .prop_map(|(l, u, d, s, rest)| format!("{rest}{s}{d}{u}{l}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn letters_and_spaces_are_valid_names(name in "[A-Za-z ]{0,20}[A-Za-z][A-Za-z ]{0,20}") {
        prop_assert!(passes(FieldId::Name, &name));
    }

    #[test]
    fn any_digit_invalidates_a_name(prefix in "[A-Za-z ]{0,10}", digit in "[0-9]", suffix in "[A-Za-z ]{0,10}") {
        let name = format!("{prefix}{digit}{suffix}");
        prop_assert!(!passes(FieldId::Name, &name));
    }

    #[test]
    fn mobiles_starting_six_to_nine_are_valid(mobile in "[6-9][0-9]{9}") {
        prop_assert!(passes(FieldId::Mobile, &mobile));
    }

    #[test]
    fn mobiles_starting_zero_to_five_are_invalid(mobile in "[0-5][0-9]{9}") {
        prop_assert!(!passes(FieldId::Mobile, &mobile));
    }

    #[test]
    fn mobiles_of_wrong_length_are_invalid(mobile in prop_oneof!["[6-9][0-9]{0,8}", "[6-9][0-9]{10,14}"]) {
        prop_assert!(!passes(FieldId::Mobile, &mobile));
    }

    #[test]
    fn well_formed_emails_are_valid(local in "[a-z0-9._+]{1,12}", host in "[a-z0-9-]{1,12}", tld in "[a-z]{2,6}") {
        let email = format!("{local}@{host}.{tld}");
        prop_assert!(passes(FieldId::Email, &email));
    }

    #[test]
    fn emails_without_at_are_invalid(text in "[a-z0-9.]{0,30}") {
        prop_assert!(!passes(FieldId::Email, &text));
    }

    #[test]
    fn passwords_with_every_class_are_valid(password in arb_password()) {
        prop_assert!(passes(FieldId::Password, &password));
    }

    #[test]
    fn passwords_without_symbol_are_invalid(password in "[A-Za-z0-9]{8,20}") {
        prop_assert!(!passes(FieldId::Password, &password));
    }

    #[test]
    fn short_single_line_addresses_are_invalid(address in "[a-zA-Z0-9,]{1,30}") {
        prop_assert!(!passes(FieldId::Address, &address));
    }

    #[test]
    fn long_single_line_addresses_are_valid(address in "[a-zA-Z0-9, ]{0,20}[a-zA-Z0-9,]{31,50}") {
        prop_assert!(passes(FieldId::Address, &address));
    }

    #[test]
    fn multiline_addresses_are_valid(first in "[a-z ]{0,10}", second in "[a-z ]{0,10}") {
        let address = format!("{first}\n{second}");
        prop_assert!(passes(FieldId::Address, &address));
    }

    #[test]
    fn blank_other_hobby_is_invalid(blank in "[ \t\n]{0,8}") {
        prop_assert!(!passes(FieldId::OtherText, &blank));
    }
}
