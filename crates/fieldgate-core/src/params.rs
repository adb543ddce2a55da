//! Wire query-parameter construction for remote searches.

use chrono::NaiveDate;
use serde::Serialize;

/// An ordered set of wire query parameters for one remote search call.
///
/// Criteria fields that are unset are never added, so the remote API can
/// distinguish "not specified" from "empty". Insertion order is preserved and
/// follows the declared field order of the originating criteria object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds one parameter unconditionally.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Adds one parameter when the value is present.
    pub fn set_opt<T: ToString>(&mut self, key: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Adds a comma-joined list parameter when the list is non-empty.
    pub fn set_list<T: ToString>(&mut self, key: impl Into<String>, values: &[T]) {
        if values.is_empty() {
            return;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.set(key, joined);
    }

    /// Adds a "0"/"1" flag parameter when the flag is present.
    pub fn set_opt_flag(&mut self, key: impl Into<String>, value: Option<bool>) {
        if let Some(value) = value {
            self.set(key, if value { "1" } else { "0" });
        }
    }

    /// Adds a `YYYY-MM-DD` date parameter when the date is present.
    pub fn set_opt_date(&mut self, key: impl Into<String>, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.set(key, date.format("%Y-%m-%d"));
        }
    }

    /// Returns the parameters as ordered key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Returns true if no parameter was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let mut params = SearchParams::new();
        params.set_opt::<i64>("customerIDs", None);
        params.set_list::<i64>("appointmentIDs", &[]);
        params.set_opt_flag("active", None);
        params.set_opt_date("dateStart", None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_list_is_comma_joined() {
        let mut params = SearchParams::new();
        params.set_list("appointmentIDs", &[1_i64, 2, 3]);
        assert_eq!(
            params.pairs(),
            &[("appointmentIDs".to_string(), "1,2,3".to_string())]
        );
    }

    #[test]
    fn test_flag_encoding() {
        let mut params = SearchParams::new();
        params.set_opt_flag("active", Some(true));
        params.set_opt_flag("includeCancelled", Some(false));
        assert_eq!(
            params.pairs(),
            &[
                ("active".to_string(), "1".to_string()),
                ("includeCancelled".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_date_format() {
        let mut params = SearchParams::new();
        params.set_opt_date("dateStart", NaiveDate::from_ymd_opt(2024, 3, 7));
        assert_eq!(
            params.pairs(),
            &[("dateStart".to_string(), "2024-03-07".to_string())]
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut params = SearchParams::new();
        params.set("b", 2);
        params.set("a", 1);
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
