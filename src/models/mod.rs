pub mod customer;
pub mod inquiry;
pub mod position;
pub mod product;
