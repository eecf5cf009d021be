use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priced line item of an inquiry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Position {
    /// Prefixed identifier, e.g. `IP1736100000000-1A2B`.
    pub id: String,
    pub inquiry_id: String,
    pub product_id: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount_pct: Option<f64>,
    pub total: f64,
    pub date: Option<NaiveDate>,
    /// Position within the offer document, ascending from 1.
    pub sort_order: i32,
    pub display_text: Option<String>,
    pub notes: Option<String>,
}

/// Payload for inserting a new position.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPosition {
    pub id: String,
    pub inquiry_id: String,
    pub product_id: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount_pct: Option<f64>,
    pub total: f64,
    pub date: Option<NaiveDate>,
    pub sort_order: i32,
    pub display_text: Option<String>,
    pub notes: Option<String>,
}

impl NewPosition {
    /// Creates a position whose total is the quantity times the unit price.
    pub fn new(
        id: impl Into<String>,
        inquiry_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            inquiry_id: inquiry_id.into(),
            product_id: product_id.into(),
            quantity,
            unit_price,
            discount_pct: None,
            total: quantity * unit_price,
            date: None,
            sort_order,
            display_text: None,
            notes: None,
        }
    }
}

/// Position joined with the product name for list views.
#[derive(Debug, Serialize, Clone)]
pub struct PositionWithProduct {
    #[serde(flatten)]
    pub position: Position,
    pub product_name: Option<String>,
}
