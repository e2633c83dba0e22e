use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::leads::{LeadListResponse, LeadResponse, LeadsQuery};
use crate::forms::lead::{LeadForm, UpdateLeadForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::leads as service;

#[post("/leads")]
pub async fn create_lead(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    match service::create_lead(repo.get_ref(), form) {
        Ok(lead) => {
            HttpResponse::Created().json(LeadResponse::new(lead, "Lead created successfully"))
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/leads")]
pub async fn list_leads(
    repo: web::Data<DieselRepository>,
    params: web::Query<LeadsQuery>,
) -> impl Responder {
    match service::list_leads(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(LeadListResponse::from(page)),
        Err(err) => service_error_response(err),
    }
}

#[get("/leads/search")]
pub async fn search_leads(
    repo: web::Data<DieselRepository>,
    params: web::Query<LeadsQuery>,
) -> impl Responder {
    match service::search_leads(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(LeadListResponse::from(page)),
        Err(err) => service_error_response(err),
    }
}

#[put("/leads/{id}")]
pub async fn update_lead(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    web::Json(form): web::Json<UpdateLeadForm>,
) -> impl Responder {
    match service::update_lead(repo.get_ref(), id.into_inner(), form) {
        Ok(lead) => HttpResponse::Ok().json(LeadResponse::new(lead, "Lead updated successfully")),
        Err(err) => service_error_response(err),
    }
}

#[delete("/leads/{id}")]
pub async fn delete_lead(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> impl Responder {
    match service::delete_lead(repo.get_ref(), id.into_inner()) {
        Ok(lead) => HttpResponse::Ok().json(LeadResponse::new(lead, "Lead deleted successfully")),
        Err(err) => service_error_response(err),
    }
}
