//! Property-based tests for form state

use cafe_catalog::client::form::FormState;
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
    "[a-zA-Z_]{1,12}"
}

proptest! {
    #[test]
    fn test_on_change_touches_only_named_field(
        initial in prop::collection::btree_map(field_name(), ".*", 0..8),
        field in field_name(),
        value in ".*",
    ) {
        let mut form = FormState::new(initial.clone());
        form.on_change(value.clone(), &field);

        prop_assert_eq!(form.get(&field), value.as_str());
        for (name, original) in &initial {
            if name != &field {
                prop_assert_eq!(form.get(name), original.as_str());
            }
        }
    }

    #[test]
    fn test_set_form_value_replaces_all_fields(
        before in prop::collection::btree_map(field_name(), ".*", 0..8),
        after in prop::collection::btree_map(field_name(), ".*", 0..8),
    ) {
        let mut form = FormState::new(before.clone());
        form.set_form_value(after.clone());

        prop_assert_eq!(form.values(), &after);
        for name in before.keys() {
            if !after.contains_key(name) {
                prop_assert!(form.is_empty(name));
            }
        }
    }
}
