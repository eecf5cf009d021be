use actix_web::{HttpResponse, Responder, get, post, put, web};
use serde_json::json;

use crate::auth::AdminKey;
use crate::config::ServerConfig;
use crate::forms::customer::UpdateCustomerForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::admin::{self, LoginForm};

#[post("/api/admin/login")]
pub async fn login(form: web::Json<LoginForm>, config: web::Data<ServerConfig>) -> impl Responder {
    if admin::verify_password(&form.password, &config) {
        HttpResponse::Ok().json(json!({ "success": true }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "success": false }))
    }
}

#[get("/api/admin/customers")]
pub async fn list_customers(
    _admin: AdminKey,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin::list_customers(repo.get_ref()) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => {
            log::error!("Failed to list customers: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[get("/api/admin/inquiries")]
pub async fn list_inquiries(
    _admin: AdminKey,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin::list_inquiries(repo.get_ref()) {
        Ok(inquiries) => HttpResponse::Ok().json(inquiries),
        Err(err) => {
            log::error!("Failed to list inquiries: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[get("/api/admin/inquiry/{id}/positions")]
pub async fn list_inquiry_positions(
    _admin: AdminKey,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin::list_inquiry_positions(repo.get_ref(), &path.into_inner()) {
        Ok(positions) => HttpResponse::Ok().json(positions),
        Err(err) => {
            log::error!("Failed to list inquiry positions: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[put("/api/admin/customer/{id}")]
pub async fn update_customer(
    _admin: AdminKey,
    path: web::Path<String>,
    form: web::Json<UpdateCustomerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin::update_customer(repo.get_ref(), &path.into_inner(), form.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "customer not found" }))
        }
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to update customer: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}
