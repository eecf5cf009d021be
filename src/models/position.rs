use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::position::NewPosition as DomainNewPosition;
use crate::domain::position::Position as DomainPosition;

#[derive(Identifiable, Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::inquiry_positions)]
pub struct Position {
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

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::inquiry_positions)]
pub struct NewPosition<'a> {
    pub id: &'a str,
    pub inquiry_id: &'a str,
    pub product_id: &'a str,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount_pct: Option<f64>,
    pub total: f64,
    pub date: Option<NaiveDate>,
    pub sort_order: i32,
    pub display_text: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl From<Position> for DomainPosition {
    fn from(position: Position) -> Self {
        DomainPosition {
            id: position.id,
            inquiry_id: position.inquiry_id,
            product_id: position.product_id,
            quantity: position.quantity,
            unit_price: position.unit_price,
            discount_pct: position.discount_pct,
            total: position.total,
            date: position.date,
            sort_order: position.sort_order,
            display_text: position.display_text,
            notes: position.notes,
        }
    }
}

impl<'a> From<&'a DomainNewPosition> for NewPosition<'a> {
    fn from(position: &'a DomainNewPosition) -> Self {
        NewPosition {
            id: &position.id,
            inquiry_id: &position.inquiry_id,
            product_id: &position.product_id,
            quantity: position.quantity,
            unit_price: position.unit_price,
            discount_pct: position.discount_pct,
            total: position.total,
            date: position.date,
            sort_order: position.sort_order,
            display_text: position.display_text.as_deref(),
            notes: position.notes.as_deref(),
        }
    }
}
