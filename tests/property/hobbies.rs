use proptest::prelude::*;
use regform::*;

fn filled_session() -> FormSession<FieldView, MemoryStore, RecordingNavigator> {
    let mut session = regform::session(&FormConfig::default());
    let input = |field, value: &str| FormEvent::Input {
        field,
        value: value.to_string(),
    };
    session
        .dispatch_all([
            input(FieldId::Name, "Jane Doe"),
            input(FieldId::Mobile, "9123456789"),
            input(FieldId::Email, "jane@x.com"),
            input(FieldId::Password, "Abcdef1!"),
            input(FieldId::Address, "12 Lake Road\nPune"),
            FormEvent::CityChanged("Delhi".to_string()),
            FormEvent::GenderChosen("other".to_string()),
        ])
        .unwrap();
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // A record is produced exactly when at least one hobby is checked, and
    // it lists the checked labels in document order.
    #[test]
    fn record_hobbies_match_checked_boxes(checked in prop::collection::vec(any::<bool>(), 4)) {
        let mut session = filled_session();
        for (index, on) in checked.iter().enumerate() {
            session.dispatch(FormEvent::HobbyToggled { index, checked: *on }).unwrap();
        }

        let labels = FormConfig::default().hobbies;
        let expected: Vec<String> = labels
            .iter()
            .zip(&checked)
            .filter(|(_, on)| **on)
            .map(|(label, _)| label.clone())
            .collect();

        match session.dispatch(FormEvent::Submit).unwrap() {
            Dispatch::Submitted(record) => {
                prop_assert!(!expected.is_empty());
                prop_assert_eq!(record.hobbies, expected);
                prop_assert_eq!(session.controller().records().load().unwrap().len(), 1);
            }
            Dispatch::Rejected(report) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(report.messages(), vec!["Please select at least one hobby."]);
                prop_assert!(session.controller().records().load().unwrap().is_empty());
            }
            other => prop_assert!(false, "unexpected dispatch {:?}", other),
        }
    }
}
