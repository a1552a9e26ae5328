//! Serde support for refined types (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations
//! for [`Refined<T, P>`] when the `serde` feature is enabled. A refined
//! value serializes as its bare primitive and is re-checked on the way in.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use stillnum::refined::{NonNegativeF64, PositiveI32};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Order {
//!     quantity: PositiveI32,  // Validated on deserialize
//!     price: NonNegativeF64,  // Validated on deserialize
//! }
//!
//! // Deserialization validates automatically
//! let json = r#"{"quantity": 3, "price": 9.5}"#;
//! let order: Order = serde_json::from_str(json).unwrap();
//!
//! // Invalid data fails deserialization
//! let bad_json = r#"{"quantity": 0, "price": 9.5}"#;
//! let result: Result<Order, _> = serde_json::from_str(bad_json);
//! assert!(result.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Predicate, Refined};
use crate::primitive::Primitive;

impl<T, P> Serialize for Refined<T, P>
where
    T: Primitive + Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Primitive + Deserialize<'de>,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::trying_valid(value).map_err(serde::de::Error::custom)
    }
}
