use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A single filter constraint.
///
/// Scalar filters carry free text (bank name, invoice number prefix);
/// multi filters carry an ordered set of enum keys (status, pricing
/// model). The two kinds serialize differently, so they are separate
/// variants rather than a stringly-typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl FilterValue {
    /// An empty value must never reach the wire.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Scalar(s) => s.trim().is_empty(),
            FilterValue::Multi(values) => values.is_empty(),
        }
    }
}

/// The active field → value constraints of one collection query.
///
/// Field names are backend field paths and may be dotted
/// (`"pricingModel.model"`). Keys are kept in a BTreeMap so the
/// serialized form is stable regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    fields: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value for `field`. Setting an empty value clears the
    /// field entirely, so `filters` JSON never contains `""` or `[]`.
    pub fn set(&mut self, field: impl Into<String>, value: FilterValue) {
        let field = field.into();
        if value.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, value);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    /// Selected keys of a multi filter, empty when the field is unset
    /// or scalar. Convenient for checkbox groups.
    pub fn multi_values(&self, field: &str) -> Vec<String> {
        match self.fields.get(field) {
            Some(FilterValue::Multi(values)) => values.clone(),
            _ => Vec::new(),
        }
    }

    /// Current text of a scalar filter, `""` when unset.
    pub fn scalar_value(&self, field: &str) -> String {
        match self.fields.get(field) {
            Some(FilterValue::Scalar(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of active constraints, for the filter panel badge.
    pub fn active_count(&self) -> usize {
        self.fields.len()
    }

    /// The `filters` request parameter: a JSON object with only the
    /// non-empty fields, or `None` when nothing is set.
    pub fn to_json_object(&self) -> Option<Value> {
        if self.fields.is_empty() {
            return None;
        }
        let mut object = Map::new();
        for (field, value) in &self.fields {
            let json = match value {
                FilterValue::Scalar(s) => Value::String(s.clone()),
                FilterValue::Multi(values) => Value::Array(
                    values.iter().cloned().map(Value::String).collect(),
                ),
            };
            object.insert(field.clone(), json);
        }
        Some(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scalar_is_omitted_entirely() {
        let mut filters = FilterSet::new();
        filters.set("bankName", FilterValue::Scalar("".to_string()));
        assert!(filters.is_empty());
        assert_eq!(filters.to_json_object(), None);
    }

    #[test]
    fn setting_empty_clears_previous_value() {
        let mut filters = FilterSet::new();
        filters.set("bankName", FilterValue::Scalar("Revolut".to_string()));
        filters.set("bankName", FilterValue::Scalar("  ".to_string()));
        assert_eq!(filters.get("bankName"), None);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn clear_removes_a_field() {
        let mut filters = FilterSet::new();
        filters.set("status", FilterValue::Multi(vec!["OPEN".to_string()]));
        filters.clear("status");
        assert_eq!(filters.to_json_object(), None);
    }

    #[test]
    fn multi_filter_serializes_as_key_array() {
        let mut filters = FilterSet::new();
        filters.set(
            "status",
            FilterValue::Multi(vec!["CANCELLED".to_string(), "COMPLETED".to_string()]),
        );
        let json = filters.to_json_object().unwrap();
        assert_eq!(
            json.to_string(),
            r#"{"status":["CANCELLED","COMPLETED"]}"#
        );
    }

    #[test]
    fn dotted_field_paths_are_kept_verbatim() {
        let mut filters = FilterSet::new();
        filters.set(
            "pricingModel.model",
            FilterValue::Multi(vec!["PER_KM".to_string()]),
        );
        let json = filters.to_json_object().unwrap();
        assert_eq!(json.to_string(), r#"{"pricingModel.model":["PER_KM"]}"#);
    }

    #[test]
    fn replacing_a_value_keeps_one_entry_per_field() {
        let mut filters = FilterSet::new();
        filters.set("status", FilterValue::Multi(vec!["PLANNED".to_string()]));
        filters.set("status", FilterValue::Multi(vec!["COMPLETED".to_string()]));
        assert_eq!(filters.active_count(), 1);
        assert_eq!(filters.multi_values("status"), vec!["COMPLETED".to_string()]);
    }
}
