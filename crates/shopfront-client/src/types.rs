//! Request and response types for the frontend service.
//!
//! Page payloads (home, product, cart, metadata, checkout receipt) are not
//! modelled here: callers decode them into whatever type they need, or into
//! `serde_json::Value` when they only pass them through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the `quotes.json` listing.
///
/// The service returns quotes as an object keyed by quote id; the key is
/// carried into `id` unless the quote names its own, and every other field
/// is kept as-is in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Quote {
    /// Builds a quote from one `key → value` entry of the listing.
    ///
    /// Fields of the value are laid over `{ "id": key }`, so an `id` inside the
    /// value replaces the key: a string is taken as-is and a number in its
    /// decimal form. Any other inner `id` is dropped and the key kept.
    /// `null`, booleans and numbers carry no fields and yield an id-only quote.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `value` is a string or an array.
    pub fn from_entry(key: String, value: Value) -> Result<Self, serde_json::Error> {
        let mut fields = match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
            other => serde_json::from_value::<Map<String, Value>>(other)?,
        };
        let id = match fields.shift_remove("id") {
            Some(Value::String(inner)) => inner,
            Some(Value::Number(inner)) => inner.to_string(),
            _ => key,
        };
        Ok(Self { id, fields })
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Converts the `{ id: quote, ... }` mapping into a list of [`Quote`]s, in
/// the order the keys appear in the response.
///
/// # Errors
///
/// Returns the `serde_json` error if `data` is not an object, or if any of its
/// values is a string or an array.
pub fn quotes_from_mapping(data: Value) -> Result<Vec<Quote>, serde_json::Error> {
    serde_json::from_value::<Map<String, Value>>(data)?
        .into_iter()
        .map(|(id, value)| Quote::from_entry(id, value))
        .collect()
}

/// Body of `POST /cart/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /cart/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub street_address: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub credit_card_number: String,
    pub credit_card_expiration_month: u32,
    pub credit_card_expiration_year: u32,
    pub credit_card_cvv: String,
}

/// Result of a call whose response body is intentionally discarded.
/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn quotes_from_mapping_injects_keys_as_ids() {
        let quotes = quotes_from_mapping(json!({
            "a": { "price": 10 },
            "b": { "price": 20, "name": "Loafers" }
        }))
        .unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, "a");
        assert_eq!(quotes[0].get("price"), Some(&json!(10)));
        assert_eq!(quotes[1].id, "b");
        assert_eq!(quotes[1].get("price"), Some(&json!(20)));
        assert_eq!(quotes[1].get("name"), Some(&json!("Loafers")));
    }

    #[test]
    fn quotes_from_mapping_handles_empty_object() {
        assert!(quotes_from_mapping(json!({})).unwrap().is_empty());
    }

    #[test]
    fn quotes_from_mapping_rejects_non_object() {
        assert!(quotes_from_mapping(json!([1, 2, 3])).is_err());
        assert!(quotes_from_mapping(json!("quotes")).is_err());
    }

    #[test]
    fn inner_string_id_replaces_key() {
        let quote =
            Quote::from_entry("outer".to_owned(), json!({ "x": 1, "id": "inner", "y": 2 })).unwrap();
        assert_eq!(quote.id, "inner");
        assert_eq!(quote.get("id"), None);
        assert_eq!(
            serde_json::to_value(&quote).unwrap(),
            json!({ "id": "inner", "x": 1, "y": 2 })
        );
    }

    #[test]
    fn inner_numeric_id_replaces_key() {
        let quote = Quote::from_entry("outer".to_owned(), json!({ "id": 7 })).unwrap();
        assert_eq!(quote.id, "7");
    }

    #[test]
    fn key_is_kept_when_inner_id_is_not_a_scalar_id() {
        let quote =
            Quote::from_entry("outer".to_owned(), json!({ "id": null, "x": 1 })).unwrap();
        assert_eq!(quote.id, "outer");
        assert_eq!(quote.get("id"), None);
        assert_eq!(quote.get("x"), Some(&json!(1)));
    }

    #[test]
    fn scalar_quotes_have_only_an_id() {
        for value in [Value::Null, json!(42), json!(true)] {
            let quote = Quote::from_entry("q1".to_owned(), value).unwrap();
            assert_eq!(quote.id, "q1");
            assert!(quote.fields.is_empty());
        }
    }

    #[test]
    fn string_and_array_quotes_are_rejected() {
        assert!(Quote::from_entry("q1".to_owned(), json!("quote")).is_err());
        assert!(Quote::from_entry("q1".to_owned(), json!([1, 2])).is_err());
    }

    #[test]
    fn quotes_from_mapping_keeps_response_key_order() {
        let quotes = quotes_from_mapping(json!({
            "z": { "price": 1 },
            "a": { "price": 2 },
            "m": { "price": 3 }
        }))
        .unwrap();
        let ids: Vec<&str> = quotes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn empty_response_serializes_as_empty_object() {
        assert_eq!(serde_json::to_value(EmptyResponse {}).unwrap(), json!({}));
    }

    #[test]
    fn add_to_cart_request_uses_snake_case_fields() {
        let body = serde_json::to_value(AddToCartRequest {
            product_id: "OLJCESPC7Z".to_owned(),
            quantity: 2,
        })
        .unwrap();
        assert_eq!(body, json!({ "product_id": "OLJCESPC7Z", "quantity": 2 }));
    }
}
