use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::UpdateCustomer;
use crate::forms::sanitize_inline_text;

#[derive(Debug, Error)]
pub enum CustomerFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Full replacement payload for one customer row.
///
/// Every field is optional on the wire, absent fields are written back as
/// their empty value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCustomerForm {
    #[validate(length(max = 255))]
    pub company_name: String,
    pub role: String,
    pub contact_salutation: String,
    pub contact_title: String,
    #[validate(length(max = 255))]
    pub contact_first_name: String,
    #[validate(length(max = 255))]
    pub contact_last_name: String,
    pub phone: String,
    pub email: String,
    pub lead_salutation: String,
    pub lead_title: String,
    pub lead_first_name: String,
    pub lead_last_name: String,
    pub lead_phone: String,
    pub lead_email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub billing_address: String,
    pub language: String,
    pub notes: String,
    pub marketing_consent: bool,
    pub source: String,
    pub material_sent: bool,
}

impl UpdateCustomerForm {
    pub fn into_update_customer(self) -> Result<UpdateCustomer, CustomerFormError> {
        self.validate()?;

        Ok(UpdateCustomer {
            company_name: sanitize_inline_text(&self.company_name),
            role: sanitize_inline_text(&self.role),
            contact_salutation: sanitize_inline_text(&self.contact_salutation),
            contact_title: sanitize_inline_text(&self.contact_title),
            contact_first_name: sanitize_inline_text(&self.contact_first_name),
            contact_last_name: sanitize_inline_text(&self.contact_last_name),
            phone: sanitize_inline_text(&self.phone),
            email: self.email.trim().to_string(),
            lead_salutation: sanitize_inline_text(&self.lead_salutation),
            lead_title: sanitize_inline_text(&self.lead_title),
            lead_first_name: sanitize_inline_text(&self.lead_first_name),
            lead_last_name: sanitize_inline_text(&self.lead_last_name),
            lead_phone: sanitize_inline_text(&self.lead_phone),
            lead_email: self.lead_email.trim().to_string(),
            address: self.address.trim().to_string(),
            city: sanitize_inline_text(&self.city),
            postal_code: sanitize_inline_text(&self.postal_code),
            country: sanitize_inline_text(&self.country),
            billing_address: self.billing_address.trim().to_string(),
            language: sanitize_inline_text(&self.language),
            notes: self.notes.trim().to_string(),
            marketing_consent: self.marketing_consent,
            source: sanitize_inline_text(&self.source),
            material_sent: self.material_sent,
        })
    }
}
