use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::NewCustomer;
use crate::forms::sanitize_inline_text;

#[derive(Debug, Error)]
pub enum OfferFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("date must be formatted as YYYY-MM-DD")]
    InvalidDate,
}

/// Booking request submitted by the public frontend.
#[derive(Debug, Deserialize, Validate)]
pub struct OfferForm {
    pub customer_id: Option<String>,
    #[validate(nested)]
    pub new_customer: Option<NewCustomerForm>,
    /// Seminar date as `YYYY-MM-DD`.
    pub date: String,
    #[validate(range(min = 1))]
    pub participants: i32,
    /// Total quoted by the frontend in euro.
    pub total: f64,
    /// `full` or `half`, anything else books no package.
    pub package: Option<String>,
    pub room: Option<CountedFlag>,
    pub dinner: Option<CountedFlag>,
    pub extras: Option<ExtrasForm>,
    pub activities: Option<ActivitiesForm>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCustomerForm {
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1))]
    pub firstname: String,
    #[validate(length(min = 1))]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

/// Bookable option carrying its own quantity, e.g. rooms or dinners.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct CountedFlag {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub count: f64,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct ExtrasForm {
    #[serde(default)]
    pub sandwiches: bool,
    #[serde(default)]
    pub salad: bool,
    #[serde(default)]
    pub wine: bool,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct ActivitiesForm {
    #[serde(default, rename = "cookingClass")]
    pub cooking_class: bool,
    #[serde(default, rename = "kitchenRental")]
    pub kitchen_rental: bool,
}

impl OfferForm {
    /// Validates the payload and parses the requested seminar date.
    pub fn validated_event_date(&self) -> Result<NaiveDate, OfferFormError> {
        self.validate()?;

        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| OfferFormError::InvalidDate)
    }
}

impl NewCustomerForm {
    pub fn to_new_customer(&self, id: String) -> NewCustomer {
        NewCustomer::new(id)
            .with_company(sanitize_inline_text(&self.company))
            .with_contact(
                sanitize_inline_text(&self.firstname),
                sanitize_inline_text(&self.lastname),
            )
            .with_email(self.email.trim())
            .with_phone(sanitize_inline_text(&self.phone))
            .with_address(
                self.address.trim(),
                sanitize_inline_text(&self.city),
                sanitize_inline_text(&self.zip),
                sanitize_inline_text(&self.country),
            )
    }
}
