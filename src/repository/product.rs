use diesel::prelude::*;

use crate::domain::product::NewProduct as DomainNewProduct;
use crate::domain::product::Product as DomainProduct;
use crate::models::product::{NewProduct, Product};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product(&self, id: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id)
            .first::<Product>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let products = products::table.load::<Product>(&mut conn)?;

        Ok(products.into_iter().map(Into::into).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn upsert_products(&self, products: &[DomainNewProduct]) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut affected = 0usize;

            for product in products {
                let db_product = NewProduct::from(product);

                diesel::insert_into(products::table)
                    .values(&db_product)
                    .on_conflict(products::id)
                    .do_update()
                    .set(&db_product)
                    .execute(conn)?;

                affected += 1;
            }

            Ok(affected)
        })
    }
}
