use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::customer::NewCustomer as DomainNewCustomer;
use crate::domain::customer::UpdateCustomer as DomainUpdateCustomer;

#[derive(Identifiable, Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: NaiveDateTime,
    pub role: String,
    pub contact_salutation: String,
    pub contact_title: String,
    pub lead_salutation: String,
    pub lead_title: String,
    pub lead_first_name: String,
    pub lead_last_name: String,
    pub lead_phone: String,
    pub lead_email: String,
    pub billing_address: String,
    pub language: String,
    pub notes: String,
    pub marketing_consent: bool,
    pub source: String,
    pub material_sent: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub id: &'a str,
    pub company_name: &'a str,
    pub role: &'a str,
    pub contact_salutation: &'a str,
    pub contact_title: &'a str,
    pub contact_first_name: &'a str,
    pub contact_last_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub lead_salutation: &'a str,
    pub lead_title: &'a str,
    pub lead_first_name: &'a str,
    pub lead_last_name: &'a str,
    pub lead_phone: &'a str,
    pub lead_email: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub postal_code: &'a str,
    pub country: &'a str,
    pub billing_address: &'a str,
    pub language: &'a str,
    pub notes: &'a str,
    pub marketing_consent: bool,
    pub source: &'a str,
    pub material_sent: bool,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer<'a> {
    pub company_name: &'a str,
    pub role: &'a str,
    pub contact_salutation: &'a str,
    pub contact_title: &'a str,
    pub contact_first_name: &'a str,
    pub contact_last_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub lead_salutation: &'a str,
    pub lead_title: &'a str,
    pub lead_first_name: &'a str,
    pub lead_last_name: &'a str,
    pub lead_phone: &'a str,
    pub lead_email: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub postal_code: &'a str,
    pub country: &'a str,
    pub billing_address: &'a str,
    pub language: &'a str,
    pub notes: &'a str,
    pub marketing_consent: bool,
    pub source: &'a str,
    pub material_sent: bool,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        DomainCustomer {
            id: customer.id,
            company_name: customer.company_name,
            role: customer.role,
            contact_salutation: customer.contact_salutation,
            contact_title: customer.contact_title,
            contact_first_name: customer.contact_first_name,
            contact_last_name: customer.contact_last_name,
            phone: customer.phone,
            email: customer.email,
            lead_salutation: customer.lead_salutation,
            lead_title: customer.lead_title,
            lead_first_name: customer.lead_first_name,
            lead_last_name: customer.lead_last_name,
            lead_phone: customer.lead_phone,
            lead_email: customer.lead_email,
            address: customer.address,
            city: customer.city,
            postal_code: customer.postal_code,
            country: customer.country,
            billing_address: customer.billing_address,
            language: customer.language,
            notes: customer.notes,
            marketing_consent: customer.marketing_consent,
            source: customer.source,
            material_sent: customer.material_sent,
            created_at: customer.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        NewCustomer {
            id: &customer.id,
            company_name: &customer.company_name,
            role: &customer.role,
            contact_salutation: &customer.contact_salutation,
            contact_title: &customer.contact_title,
            contact_first_name: &customer.contact_first_name,
            contact_last_name: &customer.contact_last_name,
            phone: &customer.phone,
            email: &customer.email,
            lead_salutation: &customer.lead_salutation,
            lead_title: &customer.lead_title,
            lead_first_name: &customer.lead_first_name,
            lead_last_name: &customer.lead_last_name,
            lead_phone: &customer.lead_phone,
            lead_email: &customer.lead_email,
            address: &customer.address,
            city: &customer.city,
            postal_code: &customer.postal_code,
            country: &customer.country,
            billing_address: &customer.billing_address,
            language: &customer.language,
            notes: &customer.notes,
            marketing_consent: customer.marketing_consent,
            source: &customer.source,
            material_sent: customer.material_sent,
            created_at: customer.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(updates: &'a DomainUpdateCustomer) -> Self {
        UpdateCustomer {
            company_name: &updates.company_name,
            role: &updates.role,
            contact_salutation: &updates.contact_salutation,
            contact_title: &updates.contact_title,
            contact_first_name: &updates.contact_first_name,
            contact_last_name: &updates.contact_last_name,
            phone: &updates.phone,
            email: &updates.email,
            lead_salutation: &updates.lead_salutation,
            lead_title: &updates.lead_title,
            lead_first_name: &updates.lead_first_name,
            lead_last_name: &updates.lead_last_name,
            lead_phone: &updates.lead_phone,
            lead_email: &updates.lead_email,
            address: &updates.address,
            city: &updates.city,
            postal_code: &updates.postal_code,
            country: &updates.country,
            billing_address: &updates.billing_address,
            language: &updates.language,
            notes: &updates.notes,
            marketing_consent: updates.marketing_consent,
            source: &updates.source,
            material_sent: updates.material_sent,
        }
    }
}
