use diesel::prelude::*;

use crate::domain::product::NewProduct as DomainNewProduct;
use crate::domain::product::{PriceUnit, Product as DomainProduct};

#[derive(Identifiable, Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_unit: String,
    pub unit_price: f64,
    pub tax_rate: f64,
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub price_unit: &'a str,
    pub unit_price: f64,
    pub tax_rate: f64,
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        DomainProduct {
            id: product.id,
            name: product.name,
            category: product.category,
            description: product.description,
            price_unit: PriceUnit::from(product.price_unit.as_str()),
            unit_price: product.unit_price,
            tax_rate: product.tax_rate,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        NewProduct {
            id: &product.id,
            name: &product.name,
            category: &product.category,
            description: &product.description,
            price_unit: product.price_unit.as_str(),
            unit_price: product.unit_price,
            tax_rate: product.tax_rate,
        }
    }
}
