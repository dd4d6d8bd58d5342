#![no_main]

use libfuzzer_sys::fuzz_target;
use regform::enums::FieldId;
use regform::feedback::FieldView;
use regform::form::validate;
use regform::rules::RuleTable;
use regform::types::TextField;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let rules = RuleTable::standard();
    for id in FieldId::ALL {
        let mut field = TextField::new(id, FieldView::new());
        field.set_value(s.as_ref());
        let valid = validate(&mut field, &rules);
        assert_eq!(valid, field.feedback().error_text().is_empty());
    }
});
