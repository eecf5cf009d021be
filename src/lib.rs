pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod domain;
pub mod forms;
pub mod ids;
pub mod models;
pub mod renderer;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod storage;

/// Customer assigned to offer requests that do not name one.
pub const DEFAULT_CUSTOMER_ID: &str = "C00001";
