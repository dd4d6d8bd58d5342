#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use regform::{Dispatch, FieldId, FormConfig, FormEvent};

fn arbitrary_event(u: &mut Unstructured<'_>) -> arbitrary::Result<FormEvent> {
    let field = *u.choose(&FieldId::ALL)?;
    Ok(match u.int_in_range(0..=6)? {
        0 => FormEvent::Input {
            field,
            value: String::arbitrary(u)?,
        },
        1 => FormEvent::TabForward { field },
        2 => FormEvent::CityChanged(String::arbitrary(u)?),
        3 => FormEvent::GenderChosen(String::arbitrary(u)?),
        4 => FormEvent::HobbyToggled {
            index: u.int_in_range(0..=5)?,
            checked: bool::arbitrary(u)?,
        },
        5 => FormEvent::OtherHobbyToggled(bool::arbitrary(u)?),
        _ => FormEvent::Submit,
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let mut session = regform::session(&FormConfig::default());
    let mut submitted = 0;
    while let Ok(event) = arbitrary_event(&mut u) {
        match session.dispatch(event) {
            Ok(Dispatch::Submitted(_)) => submitted += 1,
            Ok(_) => {}
            Err(e) => panic!("memory store failed: {}", e),
        }
        if u.is_empty() {
            break;
        }
    }
    let stored = session.controller().records().load().unwrap_or_default();
    assert_eq!(stored.len(), submitted);
});
