use crate::catalog;
use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::repository::{CustomerReader, CustomerWriter, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Reseeds the product catalog and ensures the default customer exists.
///
/// Runs on every startup. Products are upserted so that price changes roll
/// out with a deploy, the default customer insert is a no-op once the row
/// exists.
pub fn seed_reference_data<R>(repo: &R) -> ServiceResult<()>
where
    R: ProductWriter + CustomerWriter + ?Sized,
{
    repo.upsert_products(&catalog::seed_products())
        .map_err(ServiceError::from)?;
    repo.ensure_customer(&catalog::default_customer())
        .map_err(ServiceError::from)?;

    Ok(())
}

pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Looks up a single customer, `None` when the id is unknown.
pub fn get_customer<R>(repo: &R, id: &str) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer(id).map_err(ServiceError::from)
}
