use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Company placing seminar inquiries, together with its contact people.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Customer {
    /// Prefixed identifier, e.g. `C1736100000000-1A2B`.
    pub id: String,
    pub company_name: String,
    /// Free form role of the company, e.g. agency or direct client.
    pub role: String,
    pub contact_salutation: String,
    pub contact_title: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
    pub email: String,
    /// Decision maker contacted during lead generation.
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
    /// Correspondence language code, e.g. `DE`.
    pub language: String,
    pub notes: String,
    pub marketing_consent: bool,
    pub source: String,
    pub material_sent: bool,
    pub created_at: NaiveDateTime,
}

/// Payload for inserting a new customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub id: String,
    pub company_name: String,
    pub role: String,
    pub contact_salutation: String,
    pub contact_title: String,
    pub contact_first_name: String,
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
    pub created_at: NaiveDateTime,
}

impl NewCustomer {
    /// Creates an insert payload with every optional field left empty.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Local::now().naive_utc();

        Self {
            id: id.into(),
            company_name: String::new(),
            role: String::new(),
            contact_salutation: String::new(),
            contact_title: String::new(),
            contact_first_name: String::new(),
            contact_last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            lead_salutation: String::new(),
            lead_title: String::new(),
            lead_first_name: String::new(),
            lead_last_name: String::new(),
            lead_phone: String::new(),
            lead_email: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: String::new(),
            billing_address: String::new(),
            language: String::new(),
            notes: String::new(),
            marketing_consent: false,
            source: String::new(),
            material_sent: false,
            created_at: now,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_contact(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.contact_first_name = first_name.into();
        self.contact_last_name = last_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.postal_code = postal_code.into();
        self.country = country.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Full replacement of every editable customer field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomer {
    pub company_name: String,
    pub role: String,
    pub contact_salutation: String,
    pub contact_title: String,
    pub contact_first_name: String,
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
