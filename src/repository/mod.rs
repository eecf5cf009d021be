pub mod customer;
pub mod errors;
pub mod inquiry;
#[cfg(test)]
pub mod mock;
pub mod position;
pub mod product;

use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::inquiry::{Inquiry, InquiryWithCustomer, NewInquiry, OfferArtifact};
use crate::domain::position::{NewPosition, PositionWithProduct};
use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;

/// Diesel backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Gets a pooled connection.
    pub fn conn(&self) -> Result<DbConnection, diesel::r2d2::PoolError> {
        self.pool.get()
    }
}

pub trait CustomerReader {
    fn get_customer(&self, id: &str) -> RepositoryResult<Option<Customer>>;
    /// Customers ordered by creation time, newest first.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    /// Replaces every editable field of the customer row.
    fn update_customer(&self, id: &str, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    /// Inserts the customer unless a row with its id already exists.
    fn ensure_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product(&self, id: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    /// Inserts the products, overwriting existing rows with the same id.
    fn upsert_products(&self, products: &[NewProduct]) -> RepositoryResult<usize>;
}

pub trait InquiryReader {
    fn get_inquiry(&self, id: &str) -> RepositoryResult<Option<Inquiry>>;
    /// Inquiries joined with their customer, newest first.
    fn list_inquiries(&self) -> RepositoryResult<Vec<InquiryWithCustomer>>;
}

pub trait InquiryWriter {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
    /// Records the generated offer document on the inquiry row.
    fn attach_offer_artifact(&self, id: &str, artifact: &OfferArtifact)
    -> RepositoryResult<Inquiry>;
}

pub trait PositionReader {
    /// Positions of one inquiry joined with the product name, by sort order.
    fn list_positions(&self, inquiry_id: &str) -> RepositoryResult<Vec<PositionWithProduct>>;
}

pub trait PositionWriter {
    /// Inserts the positions in one transaction.
    fn create_positions(&self, new_positions: &[NewPosition]) -> RepositoryResult<usize>;
}
