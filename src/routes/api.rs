use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;
use serde_json::json;

use crate::forms::offer::OfferForm;
use crate::renderer::DocxTemplateRenderer;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::catalog;
use crate::services::offer::{self, DocumentOutcome};
use crate::storage::ArtifactStore;

/// Body returned by the offer endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferResponse {
    success: bool,
    inquiry_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[get("/api/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match catalog::list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[get("/api/customer/{id}")]
pub async fn get_customer(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::get_customer(repo.get_ref(), &path.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => {
            log::error!("Failed to load customer: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[post("/api/offer")]
pub async fn create_offer(
    form: web::Json<OfferForm>,
    repo: web::Data<DieselRepository>,
    renderer: web::Data<DocxTemplateRenderer>,
    store: web::Data<dyn ArtifactStore>,
) -> impl Responder {
    match offer::create_offer(
        repo.get_ref(),
        renderer.get_ref(),
        store.get_ref(),
        form.into_inner(),
    )
    .await
    {
        Ok(outcome) => {
            let response = match outcome.document {
                DocumentOutcome::Stored { reference, .. } => OfferResponse {
                    success: true,
                    inquiry_id: outcome.inquiry_id,
                    file: Some(reference),
                    message: None,
                },
                DocumentOutcome::Skipped { reason } => OfferResponse {
                    success: true,
                    inquiry_id: outcome.inquiry_id,
                    file: None,
                    message: Some(format!(
                        "Offer saved but document generation failed: {reason}"
                    )),
                },
            };

            HttpResponse::Ok().json(response)
        }
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to create offer: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}
