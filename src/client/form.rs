//! Form State
//!
//! Controlled-input state for every screen with text fields. Values are
//! keyed by field name; validation is left to the screen.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    /// Start from `(field, initial value)` pairs
    pub fn new<K, V>(initial: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: initial
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Current value of `field`, `""` when the field is unknown
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set a single field
    pub fn on_change(&mut self, value: impl Into<String>, field: &str) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Replace every field at once
    pub fn set_form_value<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        *self = Self::new(values);
    }

    /// Mutable handle for an egui text field; the field is created if missing
    pub fn field_mut(&mut self, field: &str) -> &mut String {
        self.values.entry(field.to_string()).or_default()
    }

    pub fn is_empty(&self, field: &str) -> bool {
        self.get(field).is_empty()
    }

    pub fn clear(&mut self, field: &str) {
        if let Some(value) = self.values.get_mut(field) {
            value.clear();
        }
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let form = FormState::new([("email", ""), ("password", "")]);
        assert_eq!(form.get("email"), "");
        assert_eq!(form.values().len(), 2);
    }

    #[test]
    fn test_unknown_field_reads_empty() {
        let form = FormState::default();
        assert_eq!(form.get("nope"), "");
        assert!(form.is_empty("nope"));
    }

    #[test]
    fn test_on_change_sets_one_field() {
        let mut form = FormState::new([("email", ""), ("password", "")]);
        form.on_change("ana@example.com", "email");
        assert_eq!(form.get("email"), "ana@example.com");
        assert_eq!(form.get("password"), "");
    }

    #[test]
    fn test_set_form_value_replaces_everything() {
        let mut form = FormState::new([("_id", ""), ("productName", "Old")]);
        form.set_form_value([("_id", "p1"), ("categoryId", "c1")]);
        assert_eq!(form.get("_id"), "p1");
        assert_eq!(form.get("categoryId"), "c1");
        assert_eq!(form.get("productName"), "");
    }

    #[test]
    fn test_field_mut_creates_field() {
        let mut form = FormState::default();
        form.field_mut("name").push_str("Latte");
        assert_eq!(form.get("name"), "Latte");
    }

    #[test]
    fn test_clear() {
        let mut form = FormState::new([("password", "secret")]);
        form.clear("password");
        assert!(form.is_empty("password"));
    }
}
