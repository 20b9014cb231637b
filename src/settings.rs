//! Named Settings
//!
//! An immutable bag of named values built from a JSON object. The copy
//! choice is explicit at construction: [`Settings::cloned_from`] deep-copies
//! the source map so later mutations of it cannot leak in, while
//! [`Settings::adopting`] takes ownership without copying.
//!
//! # Example
//!
//! ```
//! use nearcache::Settings;
//! use serde_json::{json, Map};
//!
//! let mut map = Map::new();
//! map.insert("eps".to_string(), json!(0.01));
//! map.insert("labels".to_string(), json!(["u", "v"]));
//!
//! let settings = Settings::cloned_from(&map);
//! let eps: f64 = settings.get("eps").unwrap();
//! assert_eq!(eps, 0.01);
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{NearcacheError, Result};

/// Immutable named-value settings object.
#[derive(Debug, Clone)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Build settings by deep-copying every key and value from `map`.
    pub fn cloned_from(map: &Map<String, Value>) -> Self {
        Self {
            values: map.clone(),
        }
    }

    /// Build settings by taking ownership of `map` without copying.
    pub fn adopting(map: Map<String, Value>) -> Self {
        Self { values: map }
    }

    /// Look up a value by name and deserialize it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`NearcacheError::ConfigField`] when the field is missing or
    /// cannot be deserialized as `T`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| NearcacheError::ConfigField {
                name: name.to_string(),
                reason: "missing".to_string(),
            })?;
        serde_json::from_value(value.clone()).map_err(|e| NearcacheError::ConfigField {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Look up an optional value by name.
    ///
    /// Returns `Ok(None)` when the field is absent, `Err` only when it is
    /// present but of the wrong type.
    pub fn get_opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| NearcacheError::ConfigField {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Whether a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Raw access to a field's JSON value.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the settings bag is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings ({} fields)", self.values.len())?;
        for (key, value) in &self.values {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_map() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("eps".to_string(), json!(1e-3));
        map.insert("maxsize".to_string(), json!(100));
        map.insert("name".to_string(), json!("wave-1d"));
        map.insert("dims".to_string(), json!([1, 1]));
        map
    }

    #[test]
    fn test_get_typed_fields() {
        let settings = Settings::cloned_from(&sample_map());
        let eps: f64 = settings.get("eps").unwrap();
        let maxsize: usize = settings.get("maxsize").unwrap();
        let name: String = settings.get("name").unwrap();
        let dims: Vec<usize> = settings.get("dims").unwrap();

        assert_eq!(eps, 1e-3);
        assert_eq!(maxsize, 100);
        assert_eq!(name, "wave-1d");
        assert_eq!(dims, vec![1, 1]);
    }

    #[test]
    fn test_missing_field() {
        let settings = Settings::cloned_from(&sample_map());
        let err = settings.get::<f64>("absent").unwrap_err();
        match err {
            NearcacheError::ConfigField { name, reason } => {
                assert_eq!(name, "absent");
                assert_eq!(reason, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_type() {
        let settings = Settings::cloned_from(&sample_map());
        assert!(settings.get::<Vec<String>>("eps").is_err());
    }

    #[test]
    fn test_get_opt() {
        let settings = Settings::cloned_from(&sample_map());
        assert_eq!(settings.get_opt::<usize>("maxsize").unwrap(), Some(100));
        assert_eq!(settings.get_opt::<usize>("absent").unwrap(), None);
        assert!(settings.get_opt::<Vec<String>>("eps").is_err());
    }

    #[test]
    fn test_cloned_from_is_independent() {
        let mut map = sample_map();
        let settings = Settings::cloned_from(&map);

        // Mutate the source after construction
        map.insert("eps".to_string(), json!(999.0));
        map.remove("name");

        let eps: f64 = settings.get("eps").unwrap();
        assert_eq!(eps, 1e-3);
        assert!(settings.contains("name"));
    }

    #[test]
    fn test_adopting_takes_ownership() {
        let settings = Settings::adopting(sample_map());
        assert_eq!(settings.len(), 4);
        assert!(settings.contains("dims"));
    }

    #[test]
    fn test_display_lists_fields() {
        let settings = Settings::cloned_from(&sample_map());
        let text = settings.to_string();
        assert!(text.contains("4 fields"));
        assert!(text.contains("maxsize: 100"));
    }
}
