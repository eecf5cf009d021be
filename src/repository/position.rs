use diesel::prelude::*;

use crate::domain::position::NewPosition as DomainNewPosition;
use crate::domain::position::PositionWithProduct;
use crate::models::position::{NewPosition, Position};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PositionReader, PositionWriter};

impl PositionReader for DieselRepository {
    fn list_positions(&self, inquiry_id: &str) -> RepositoryResult<Vec<PositionWithProduct>> {
        use crate::schema::{inquiry_positions, products};

        let mut conn = self.conn()?;

        let rows = inquiry_positions::table
            .left_join(products::table)
            .filter(inquiry_positions::inquiry_id.eq(inquiry_id))
            .select((Position::as_select(), products::name.nullable()))
            .order(inquiry_positions::sort_order.asc())
            .load::<(Position, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(position, product_name)| PositionWithProduct {
                position: position.into(),
                product_name,
            })
            .collect())
    }
}

impl PositionWriter for DieselRepository {
    fn create_positions(&self, new_positions: &[DomainNewPosition]) -> RepositoryResult<usize> {
        use crate::schema::inquiry_positions;

        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut inserted = 0usize;

            for position in new_positions {
                let db_position = NewPosition::from(position);

                diesel::insert_into(inquiry_positions::table)
                    .values(&db_position)
                    .execute(conn)?;

                inserted += 1;
            }

            Ok(inserted)
        })
    }
}
