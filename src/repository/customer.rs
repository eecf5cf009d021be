use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::customer::NewCustomer as DomainNewCustomer;
use crate::domain::customer::UpdateCustomer as DomainUpdateCustomer;
use crate::models::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};

impl CustomerReader for DieselRepository {
    fn get_customer(&self, id: &str) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let customer = customers::table
            .find(id)
            .first::<Customer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let customers = customers::table
            .order(customers::created_at.desc())
            .load::<Customer>(&mut conn)?;

        Ok(customers.into_iter().map(Into::into).collect())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_customer = NewCustomer::from(new_customer);

        let created = diesel::insert_into(customers::table)
            .values(&db_customer)
            .get_result::<Customer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        id: &str,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_updates = UpdateCustomer::from(updates);

        let updated = diesel::update(customers::table.find(id))
            .set(&db_updates)
            .get_result::<Customer>(&mut conn)?;

        Ok(updated.into())
    }

    fn ensure_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_customer = NewCustomer::from(new_customer);

        diesel::insert_into(customers::table)
            .values(&db_customer)
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }
}
