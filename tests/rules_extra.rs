//! Rule table behaviour for each governed field.

use regform::enums::FieldId;
use regform::rules::*;

fn passes(field: FieldId, value: &str) -> bool {
    RuleTable::standard()
        .get(field)
        .unwrap_or_else(|| panic!("no rule for {}", field))
        .test(value)
}

// ─── Table shape ─────────────────────────────────────────────────────────────

#[test]
fn standard_table_covers_every_text_field() {
    let table = RuleTable::standard();
    assert_eq!(table.len(), 6);
    for id in FieldId::ALL {
        let rule = table.get(id).expect("rule present");
        assert_eq!(rule.field, id);
        assert!(!rule.message.is_empty());
    }
}

#[test]
fn standard_messages() {
    let table = RuleTable::standard();
    assert_eq!(table.get(FieldId::Name).unwrap().message, "Name should only contain letters.");
    assert_eq!(
        table.get(FieldId::Mobile).unwrap().message,
        "Must be 10 digits starting with 6, 7, 8, or 9."
    );
    assert_eq!(table.get(FieldId::Email).unwrap().message, "Email is invalid.");
    assert_eq!(
        table.get(FieldId::Password).unwrap().message,
        "Invalid password: Min 8 chars, uppercase, lowercase, number and symbol."
    );
    assert_eq!(table.get(FieldId::Address).unwrap().message, "The address should be multiline.");
    assert_eq!(
        table.get(FieldId::OtherText).unwrap().message,
        "Please specify your other hobby."
    );
}

#[test]
fn without_removes_only_that_rule() {
    let table = RuleTable::standard().without(FieldId::Email);
    assert!(table.get(FieldId::Email).is_none());
    assert!(table.get(FieldId::Name).is_some());
    assert_eq!(table.len(), 5);
}

#[test]
fn later_rule_replaces_earlier() {
    let table = RuleTable::new([
        Rule::new(FieldId::Name, RuleCheck::Predicate(|_| false), "first"),
        Rule::new(FieldId::Name, RuleCheck::Predicate(|_| true), "second"),
    ]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(FieldId::Name).unwrap().message, "second");
}

#[test]
fn empty_table_has_no_rules() {
    let table = RuleTable::default();
    assert!(table.is_empty());
    assert!(table.get(FieldId::Name).is_none());
}

// ─── Name ────────────────────────────────────────────────────────────────────

#[test]
fn name_accepts_letters_and_spaces() {
    for v in ["Jane", "Jane Doe", "jane   doe", " A "] {
        assert!(passes(FieldId::Name, v), "expected '{}' to pass", v);
    }
}

#[test]
fn name_rejects_digits_punctuation_and_empty() {
    for v in ["", "Jane2", "O'Brien", "Jane-Doe", "Jane.", "Zoë"] {
        assert!(!passes(FieldId::Name, v), "expected '{}' to fail", v);
    }
}

// ─── Mobile ──────────────────────────────────────────────────────────────────

#[test]
fn mobile_examples() {
    assert!(passes(FieldId::Mobile, "9876543210"));
    assert!(passes(FieldId::Mobile, "6000000000"));
    assert!(!passes(FieldId::Mobile, "1234567890"));
    assert!(!passes(FieldId::Mobile, "5876543210"));
    assert!(!passes(FieldId::Mobile, "98765432"));
    assert!(!passes(FieldId::Mobile, "98765432100"));
    assert!(!passes(FieldId::Mobile, "98765 4321"));
    assert!(!passes(FieldId::Mobile, ""));
}

#[test]
fn mobile_rejects_non_ascii_digits() {
    // Devanagari digits are Unicode decimal digits but not 0-9.
    assert!(!passes(FieldId::Mobile, "९८७६५४३२१०"));
}

// ─── Email ───────────────────────────────────────────────────────────────────

#[test]
fn email_examples() {
    assert!(passes(FieldId::Email, "jane@x.com"));
    assert!(passes(FieldId::Email, "a.b+c@mail.example.org"));
    assert!(!passes(FieldId::Email, "jane@x"));
    assert!(!passes(FieldId::Email, "jane.x.com"));
    assert!(!passes(FieldId::Email, "ja ne@x.com"));
    assert!(!passes(FieldId::Email, "jane@@x.com"));
    assert!(!passes(FieldId::Email, "@x.com"));
    assert!(!passes(FieldId::Email, ""));
}

// ─── Password ────────────────────────────────────────────────────────────────

#[test]
fn password_examples() {
    assert!(passes(FieldId::Password, "Abcdef1!"));
    assert!(passes(FieldId::Password, "zZ9@zZ9@zZ9@"));
    assert!(!passes(FieldId::Password, "abcdef12"));
}

#[test]
fn password_requires_each_class() {
    assert!(!passes(FieldId::Password, "ABCDEF1!"), "no lowercase");
    assert!(!passes(FieldId::Password, "abcdef1!"), "no uppercase");
    assert!(!passes(FieldId::Password, "Abcdefg!"), "no digit");
    assert!(!passes(FieldId::Password, "Abcdefg1"), "no symbol");
    assert!(!passes(FieldId::Password, "Abcde1!"), "seven chars");
}

#[test]
fn password_rejects_characters_outside_allowed_set() {
    assert!(!passes(FieldId::Password, "Abcdef1!#"));
    assert!(!passes(FieldId::Password, "Abcdef1! "));
    assert!(!passes(FieldId::Password, "Abcdef1!^"));
}

// ─── Address ─────────────────────────────────────────────────────────────────

#[test]
fn address_single_line_length_threshold() {
    let twenty = "a".repeat(20);
    let thirty = "a".repeat(30);
    let thirty_one = "a".repeat(31);
    let thirty_five = "a".repeat(35);
    assert!(!passes(FieldId::Address, &twenty));
    assert!(!passes(FieldId::Address, &thirty));
    assert!(passes(FieldId::Address, &thirty_one));
    assert!(passes(FieldId::Address, &thirty_five));
}

#[test]
fn address_with_line_break_always_passes() {
    assert!(passes(FieldId::Address, "1 Main St\nTown"));
    assert!(passes(FieldId::Address, "\n"));
}

#[test]
fn address_length_is_measured_after_trimming() {
    let padded = format!("   {}   ", "a".repeat(25));
    assert!(!passes(FieldId::Address, &padded));
}

#[test]
fn address_counts_characters_not_bytes() {
    // 16 two-byte characters: 32 bytes, but only 16 characters.
    let accented = "é".repeat(16);
    assert!(!passes(FieldId::Address, &accented));
}

#[test]
fn address_counts_astral_characters_once() {
    // Each emoji is one char (two UTF-16 units): 16 stay under the threshold.
    let sixteen = "🏠".repeat(16);
    let thirty_one = "🏠".repeat(31);
    assert!(!passes(FieldId::Address, &sixteen));
    assert!(passes(FieldId::Address, &thirty_one));
}

#[test]
fn byte_order_mark_is_not_whitespace() {
    // U+FEFF is outside Unicode White_Space, so neither `\s` nor trim see it.
    assert!(!passes(FieldId::Name, "Jane\u{FEFF}Doe"));
    assert!(passes(FieldId::OtherText, "\u{FEFF}"));
    let padded = format!("\u{FEFF}{}\u{FEFF}", "a".repeat(29));
    assert!(passes(FieldId::Address, &padded));
}

// ─── Other hobby ─────────────────────────────────────────────────────────────

#[test]
fn other_hobby_requires_non_blank_text() {
    assert!(passes(FieldId::OtherText, "Chess"));
    assert!(passes(FieldId::OtherText, "  Chess  "));
    assert!(!passes(FieldId::OtherText, ""));
    assert!(!passes(FieldId::OtherText, "   \t"));
}

#[test]
fn helper_predicates_match_rules() {
    assert!(is_multiline_address("a\nb"));
    assert!(!is_multiline_address("short"));
    assert!(is_specified("x"));
    assert!(!is_specified(" "));
}
