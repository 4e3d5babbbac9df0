//! Required-field marshaling through the public API

use required::{json, marshal, unmarshal, Error, Person, Required, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Order {
    #[serde(default)]
    id: Required<String>,
    #[serde(default)]
    customer: Required<Person>,
    #[serde(default)]
    quantity: u32,
}

impl Validate for Order {
    fn validate(&self) -> required::Result<()> {
        json::ensure_set("id", &self.id)?;
        json::ensure_set("customer", &self.customer)?;
        if let Some(customer) = self.customer.get() {
            customer.validate()?;
        }
        Ok(())
    }
}

#[test]
fn test_nested_record_round_trip() {
    let order = Order {
        id: "o-1".into(),
        customer: Person::named("Lasse").into(),
        quantity: 2,
    };

    let text = marshal(&order).unwrap();
    assert_eq!(
        text,
        r#"{"id":"o-1","customer":{"name":"Lasse","age":0,"tags":[]},"quantity":2}"#
    );

    let back: Order = unmarshal(&text).unwrap();
    assert_eq!(back.id.get().map(String::as_str), Some("o-1"));
    assert_eq!(back.quantity, 2);
}

#[test]
fn test_nested_missing_field_is_reported() {
    let err = unmarshal::<Order>(r#"{"id":"o-1","customer":{}}"#).unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "name" }));
}

#[test]
fn test_outer_missing_field_is_reported_first() {
    let order = Order {
        customer: Person::default().into(),
        ..Default::default()
    };
    assert!(matches!(
        marshal(&order),
        Err(Error::MissingField { field: "id" })
    ));
}

#[test]
fn test_wrong_type_is_decode_error() {
    assert!(matches!(
        unmarshal::<Person>(r#"{"name": 5}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_pretty_output_contains_name() {
    let text = required::marshal_pretty(&Person::named("Lasse")).unwrap();
    assert!(text.contains("\"name\": \"Lasse\""));
    assert!(text.contains('\n'));
}
