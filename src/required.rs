//! `Required<T>` - a value that must be explicitly provided
//!
//! Presence is the only rule: `Required::new(String::new())` is set, even
//! though the string is empty. A default-constructed `Required` is unset.
//!
//! Serde behavior:
//! - serializing an unset value fails (`json::marshal` reports the field
//!   name before this can happen)
//! - deserializing a present, non-null value yields a set value
//! - an explicit `null` is rejected
//! - a missing key yields an unset value when the field is `#[serde(default)]`

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Required<T>(Option<T>);

impl<T> Required<T> {
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Take the value out, leaving this field unset
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<T> for Required<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Required<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: Serialize> Serialize for Required<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => Err(ser::Error::custom("required value is not set")),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Required<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ok(Self::new(value)),
            None => Err(de::Error::custom("required value is null")),
        }
    }
}
