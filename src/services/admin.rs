use serde::Deserialize;

use crate::config::ServerConfig;
use crate::domain::customer::Customer;
use crate::domain::inquiry::InquiryWithCustomer;
use crate::domain::position::PositionWithProduct;
use crate::forms::customer::UpdateCustomerForm;
use crate::repository::{CustomerReader, CustomerWriter, InquiryReader, PositionReader};
use crate::services::{ServiceError, ServiceResult};

/// Credentials submitted by the admin login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Compares a submitted password against the configured shared secret.
pub fn verify_password(password: &str, config: &ServerConfig) -> bool {
    password == config.admin_password
}

pub fn list_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers().map_err(ServiceError::from)
}

pub fn list_inquiries<R>(repo: &R) -> ServiceResult<Vec<InquiryWithCustomer>>
where
    R: InquiryReader + ?Sized,
{
    repo.list_inquiries().map_err(ServiceError::from)
}

pub fn list_inquiry_positions<R>(repo: &R, inquiry_id: &str) -> ServiceResult<Vec<PositionWithProduct>>
where
    R: PositionReader + ?Sized,
{
    repo.list_positions(inquiry_id).map_err(ServiceError::from)
}

/// Replaces every editable field of the customer row.
pub fn update_customer<R>(repo: &R, id: &str, form: UpdateCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let updates = form
        .into_update_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_customer(id, &updates).map_err(ServiceError::from)
}
