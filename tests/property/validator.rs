use proptest::prelude::*;
use regform::enums::*;
use regform::feedback::FieldView;
use regform::form::validate;
use regform::rules::RuleTable;
use regform::types::TextField;

fn arb_field() -> impl Strategy<Value = FieldId> {
    prop::sample::select(FieldId::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The returned validity, field state and rendered text agree with the rule.
    #[test]
    fn feedback_agrees_with_rule(id in arb_field(), value in "\\PC{0,40}") {
        let rules = RuleTable::standard();
        let rule = rules.get(id).unwrap();
        let mut field = TextField::new(id, FieldView::new());
        field.set_value(value.clone());

        let valid = validate(&mut field, &rules);
        prop_assert_eq!(valid, rule.test(&value));
        if valid {
            prop_assert_eq!(field.validity(), Validity::Valid);
            prop_assert_eq!(field.feedback().class(), Some(VisualClass::Valid));
            prop_assert_eq!(field.feedback().error_text(), "");
            prop_assert_eq!(field.custom_validity(), None);
        } else {
            prop_assert_eq!(field.validity(), Validity::Invalid);
            prop_assert_eq!(field.feedback().class(), Some(VisualClass::Invalid));
            prop_assert_eq!(field.feedback().error_text(), rule.message.as_str());
            prop_assert_eq!(field.custom_validity(), Some(rule.message.as_str()));
        }
    }

    // Without a rule every value is valid and nothing is rendered.
    #[test]
    fn unruled_field_always_valid(id in arb_field(), value in "\\PC{0,40}") {
        let rules = RuleTable::standard().without(id);
        let mut field = TextField::new(id, FieldView::new());
        field.set_value(value);

        prop_assert!(validate(&mut field, &rules));
        prop_assert_eq!(field.feedback().error_text(), "");
        prop_assert_eq!(field.feedback().class(), None);
    }
}
