//! Key-value records emitted by environments and evaluators.
use crate::error::TankError;
use chrono::prelude::{DateTime, Local};
use std::collections::HashMap;

/// A value stored in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, like a reward or a bar fill.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array, like an observation vector.
    Array1(Vec<f32>),

    /// A text value, like the cause of an episode end.
    String(String),
}

/// A container of named values.
///
/// ```rust
/// use tank_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", 0.1);
/// record.insert("termination", RecordValue::String("left_arena".to_string()));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), 0.1);
/// assert!(record.get_scalar("health").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut record = Self::empty();
        record.insert(name, RecordValue::Scalar(value));
        record
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges another record into this one in place.
    ///
    /// Values of `record` overwrite values of `self` under the same key.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, TankError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(TankError::RecordValueTypeError("Scalar".to_string())),
            None => Err(TankError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, TankError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(TankError::RecordValueTypeError("Array1".to_string())),
            None => Err(TankError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, TankError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(TankError::RecordValueTypeError("String".to_string())),
            None => Err(TankError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns the scalar value if the record holds exactly one scalar entry.
    pub fn get_scalar_without_key(&self) -> Option<f32> {
        if self.0.len() != 1 {
            return None;
        }
        match self.0.values().next() {
            Some(RecordValue::Scalar(value)) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(-0.05)),
            ("obs", RecordValue::Array1(vec![1.0, 0.5])),
            ("termination", RecordValue::String("destroyed".to_string())),
        ]);

        assert_eq!(record.get_scalar("reward").unwrap(), -0.05);
        assert_eq!(record.get_array1("obs").unwrap(), vec![1.0, 0.5]);
        assert_eq!(record.get_string("termination").unwrap(), "destroyed");
        assert_eq!(
            record.get_scalar("obs"),
            Err(TankError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_string("missing"),
            Err(TankError::RecordKeyError("missing".to_string()))
        );
    }

    #[test]
    fn test_merge_overwrites() {
        let mut merged = Record::from_slice(&[
            ("reward", RecordValue::Scalar(0.1)),
            ("step", RecordValue::Scalar(3.0)),
        ]);
        merged.merge_inplace(Record::from_scalar("reward", 1.0));

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get_scalar("reward").unwrap(), 1.0);
        assert_eq!(merged.get_scalar_without_key(), None);
        assert_eq!(Record::from_scalar("x", 2.0).get_scalar_without_key(), Some(2.0));
    }
}
