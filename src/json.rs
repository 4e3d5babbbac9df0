//! JSON marshaling that refuses records with unset required fields
//!
//! # Example
//!
//! ```
//! use required::json;
//! use required::Person;
//!
//! let text = json::marshal(&Person::named("Lasse"))?;
//! assert!(text.contains("\"name\":\"Lasse\""));
//!
//! let err = json::marshal(&Person::default()).unwrap_err();
//! assert!(matches!(err, required::Error::MissingField { field: "name" }));
//! # Ok::<(), required::Error>(())
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::logging::log_debug;
use crate::required::Required;

/// Records that know which of their fields must be set.
pub trait Validate {
    /// Return `Error::MissingField` for the first unset required field
    fn validate(&self) -> Result<()>;
}

/// Check a single required field, naming it in the error
pub fn ensure_set<T>(field: &'static str, value: &Required<T>) -> Result<()> {
    if value.is_set() {
        Ok(())
    } else {
        Err(Error::MissingField { field })
    }
}

/// Validate and encode compactly
pub fn marshal<T: Serialize + Validate>(value: &T) -> Result<String> {
    value.validate()?;
    let text = serde_json::to_string(value)?;
    log_debug("json", &format!("marshaled {} bytes", text.len()));
    Ok(text)
}

/// Validate and encode with indentation
pub fn marshal_pretty<T: Serialize + Validate>(value: &T) -> Result<String> {
    value.validate()?;
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode, then validate
///
/// Missing required keys surface as `MissingField`; explicit `null` for a
/// required key is a decode error.
pub fn unmarshal<T: DeserializeOwned + Validate>(text: &str) -> Result<T> {
    let value: T = serde_json::from_str(text)?;
    value.validate()?;
    Ok(value)
}
