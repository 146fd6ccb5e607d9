//! Catalog entity structures

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Product identifier. Assigned by the record store on insert as a
/// monotonically increasing sequence number; immutable afterwards.
pub type ProductId = i64;

// ============================================================================
// PRICE
// ============================================================================

/// Errors raised when constructing a [`Price`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be non-negative, got {value}")]
    Negative { value: f64 },

    #[error("Price must be a finite number")]
    NotFinite,
}

/// Fixed-scale monetary amount with two fractional digits.
///
/// Stored as minor units (cents) so arithmetic and comparison are exact.
/// Serialized to JSON as a plain decimal number; deserialization rounds
/// half-up to cents, which is the normalization step persisted values
/// go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price(0);

    /// Construct from minor units (cents).
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative {
                value: cents as f64 / 100.0,
            });
        }
        Ok(Price(cents))
    }

    /// Construct from a major-unit amount, rounding half-up to cents.
    pub fn try_from_major(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(PriceError::Negative { value });
        }
        Ok(Price((value * 100.0).round() as i64))
    }

    /// The amount in minor units (cents).
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// The amount in major units, suitable for JSON output.
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Price::try_from_major(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// PRODUCT
// ============================================================================

/// Product - a catalog record keyed by store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = f64, minimum = 0.0))]
    pub price: Price,
    pub category: String,
    pub stock_quantity: u32,
}

/// Product fields without an identity, used for creation. The record
/// store assigns the id when the draft is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = f64, minimum = 0.0))]
    pub price: Price,
    pub category: String,
    pub stock_quantity: u32,
}

impl Product {
    /// Attach an identity to a draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            stock_quantity: draft.stock_quantity,
        }
    }
}
