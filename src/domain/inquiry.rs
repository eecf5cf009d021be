use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Workflow state of an inquiry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum InquiryStatus {
    Pending,
    Offered,
    Confirmed,
    Cancelled,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        InquiryStatus::Pending
    }
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Offered => "Offered",
            InquiryStatus::Confirmed => "Confirmed",
            InquiryStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<&str> for InquiryStatus {
    fn from(value: &str) -> Self {
        match value {
            "Offered" => InquiryStatus::Offered,
            "Confirmed" => InquiryStatus::Confirmed,
            "Cancelled" => InquiryStatus::Cancelled,
            _ => InquiryStatus::Pending,
        }
    }
}

/// Seminar inquiry submitted by a customer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Inquiry {
    /// Prefixed identifier, e.g. `I1736100000000-1A2B`.
    pub id: String,
    pub customer_id: String,
    pub event_name: Option<String>,
    /// First seminar day.
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub participants: i32,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub seating: Option<String>,
    pub room_reservation: bool,
    pub status: InquiryStatus,
    /// Total quoted by the booking frontend in euro.
    pub budget: f64,
    pub valid_until: Option<NaiveDate>,
    pub offer_number: Option<String>,
    pub offer_created_at: Option<NaiveDateTime>,
    pub offer_sent_at: Option<NaiveDateTime>,
    pub offer_status: Option<String>,
    pub contracting_party: Option<String>,
    pub billing_recipient: Option<String>,
    pub notes: Option<String>,
    /// File name of the generated offer document, if any.
    pub offer_filename: Option<String>,
    /// Public download URL when the document lives in an object store.
    pub offer_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload for inserting a new inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub id: String,
    pub customer_id: String,
    pub start_date: NaiveDate,
    pub participants: i32,
    pub status: InquiryStatus,
    pub budget: f64,
    pub created_at: NaiveDateTime,
}

impl NewInquiry {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        start_date: NaiveDate,
        participants: i32,
        budget: f64,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            start_date,
            participants,
            status: InquiryStatus::default(),
            budget,
            created_at: Local::now().naive_utc(),
        }
    }
}

/// Generated offer document recorded against an inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferArtifact {
    pub filename: String,
    pub url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl OfferArtifact {
    pub fn new(filename: impl Into<String>, url: Option<String>) -> Self {
        Self {
            filename: filename.into(),
            url,
            created_at: Local::now().naive_utc(),
        }
    }
}

/// Inquiry row joined with the owning customer for list views.
#[derive(Debug, Serialize, Clone)]
pub struct InquiryWithCustomer {
    #[serde(flatten)]
    pub inquiry: Inquiry,
    /// `None` when the inquiry references a customer that no longer exists.
    pub company_name: Option<String>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
}
