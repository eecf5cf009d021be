use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::inquiry::NewInquiry as DomainNewInquiry;
use crate::domain::inquiry::{Inquiry as DomainInquiry, InquiryStatus};

#[derive(Identifiable, Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::inquiries)]
pub struct Inquiry {
    pub id: String,
    pub customer_id: String,
    pub event_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub participants: i32,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub seating: Option<String>,
    pub room_reservation: bool,
    pub status: String,
    pub budget: f64,
    pub valid_until: Option<NaiveDate>,
    pub offer_number: Option<String>,
    pub offer_created_at: Option<NaiveDateTime>,
    pub offer_sent_at: Option<NaiveDateTime>,
    pub offer_status: Option<String>,
    pub contracting_party: Option<String>,
    pub billing_recipient: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub offer_filename: Option<String>,
    pub offer_url: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::inquiries)]
pub struct NewInquiry<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub start_date: NaiveDate,
    pub participants: i32,
    pub status: &'a str,
    pub budget: f64,
    pub created_at: NaiveDateTime,
}

impl From<Inquiry> for DomainInquiry {
    fn from(inquiry: Inquiry) -> Self {
        DomainInquiry {
            id: inquiry.id,
            customer_id: inquiry.customer_id,
            event_name: inquiry.event_name,
            start_date: inquiry.start_date,
            end_date: inquiry.end_date,
            participants: inquiry.participants,
            event_type: inquiry.event_type,
            venue: inquiry.venue,
            seating: inquiry.seating,
            room_reservation: inquiry.room_reservation,
            status: InquiryStatus::from(inquiry.status.as_str()),
            budget: inquiry.budget,
            valid_until: inquiry.valid_until,
            offer_number: inquiry.offer_number,
            offer_created_at: inquiry.offer_created_at,
            offer_sent_at: inquiry.offer_sent_at,
            offer_status: inquiry.offer_status,
            contracting_party: inquiry.contracting_party,
            billing_recipient: inquiry.billing_recipient,
            notes: inquiry.notes,
            offer_filename: inquiry.offer_filename,
            offer_url: inquiry.offer_url,
            created_at: inquiry.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewInquiry> for NewInquiry<'a> {
    fn from(inquiry: &'a DomainNewInquiry) -> Self {
        NewInquiry {
            id: &inquiry.id,
            customer_id: &inquiry.customer_id,
            start_date: inquiry.start_date,
            participants: inquiry.participants,
            status: inquiry.status.as_str(),
            budget: inquiry.budget,
            created_at: inquiry.created_at,
        }
    }
}
