//! Domain entities
//!
//! Categories and products as returned by the repositories and cached by the
//! services.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Category ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Storage-assigned, immutable
    pub id: i64,
    /// Unique across categories
    pub name: String,
}

/// Fields a caller supplies to create or rename a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// == Product ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    pub stock: i64,
    pub category_id: i64,
    /// Name of the owning category at read time. Not authoritative.
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Fields a caller supplies to create or update a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock: i64,
    pub category_id: i64,
}

// == Price ==
/// A decimal amount with exactly two fractional digits, held as cents.
///
/// Serializes as a JSON number (`19.99`); deserialization rounds to the
/// nearest cent and rejects non-finite or out-of-range values. The encoding
/// is exact only up to the product price ceiling enforced on writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> i64 {
        self.cents
    }

    pub const fn is_negative(self) -> bool {
        self.cents < 0
    }
}

impl TryFrom<f64> for Price {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return Err(format!("price {} is not a representable amount", value));
        }
        Ok(Self::from_cents(cents as i64))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.cents as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_float_rounds_to_cents() {
        assert_eq!(Price::try_from(19.99).unwrap().cents(), 1999);
        assert_eq!(Price::try_from(0.1).unwrap().cents(), 10);
        assert_eq!(Price::try_from(7.0).unwrap().cents(), 700);
    }

    #[test]
    fn test_price_rejects_non_finite() {
        assert!(Price::try_from(f64::NAN).is_err());
        assert!(Price::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 2,
            name: "Gizmo".to_string(),
            description: None,
            price: Price::from_cents(1999),
            stock: 5,
            category_id: 1,
            category_name: Some("Gadgets".to_string()),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(19.99));
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["categoryName"], "Gadgets");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
