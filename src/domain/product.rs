use serde::{Deserialize, Serialize};

/// Billing unit of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    PerPerson,
    PerPersonPerNight,
    PerPersonPerDay,
    PerPersonPerMeal,
    PerHour,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::PerPerson => "per_person",
            PriceUnit::PerPersonPerNight => "per_person_per_night",
            PriceUnit::PerPersonPerDay => "per_person_per_day",
            PriceUnit::PerPersonPerMeal => "per_person_per_meal",
            PriceUnit::PerHour => "per_hour",
        }
    }
}

impl From<&str> for PriceUnit {
    fn from(value: &str) -> Self {
        match value {
            "per_person_per_night" => PriceUnit::PerPersonPerNight,
            "per_person_per_day" => PriceUnit::PerPersonPerDay,
            "per_person_per_meal" => PriceUnit::PerPersonPerMeal,
            "per_hour" => PriceUnit::PerHour,
            _ => PriceUnit::PerPerson,
        }
    }
}

/// Entry of the fixed venue catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Stable identifier, e.g. `PROD-SEMINAR-FULL`.
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_unit: PriceUnit,
    /// Gross price per billing unit in euro.
    pub unit_price: f64,
    pub tax_rate: f64,
}

/// Payload for inserting or refreshing a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_unit: PriceUnit,
    pub unit_price: f64,
    pub tax_rate: f64,
}

impl NewProduct {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        price_unit: PriceUnit,
        unit_price: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            price_unit,
            unit_price,
            tax_rate,
        }
    }
}
