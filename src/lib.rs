pub mod config;
pub mod demo;
pub mod error;
pub mod imports;
pub mod json;
pub mod logging;
pub mod person;
pub mod required;

// Re-export commonly used types
pub use error::{Error, Result};
pub use json::{marshal, marshal_pretty, unmarshal, Validate};
pub use person::Person;
pub use required::Required;
