//! HTTP handlers and the mapping from service failures to JSON responses.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::dto::leads::ErrorResponse;
use crate::services::ServiceError;

pub mod leads;

pub const SERVER_ERROR_MESSAGE: &str = "Server Error!";
pub const NOT_FOUND_MESSAGE: &str = "Lead not found";
pub const VALIDATION_MESSAGE: &str = "Validation failed";
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON body";
pub const MALFORMED_QUERY_MESSAGE: &str = "Malformed query string";

/// Registers every API route on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(health)
        .service(leads::search_leads)
        .service(leads::list_leads)
        .service(leads::create_lead)
        .service(leads::update_lead)
        .service(leads::delete_lead);
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Converts a service failure into the response the API promises.
///
/// Unexpected failures are logged here and reported with a generic message.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => HttpResponse::BadRequest()
            .json(ErrorResponse::new(VALIDATION_MESSAGE).with_errors(errors)),
        ServiceError::Form(message) | ServiceError::Conflict(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(NOT_FOUND_MESSAGE)),
        ServiceError::Repository(e) => {
            log::error!("Lead store failure: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(SERVER_ERROR_MESSAGE))
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {err}");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(MALFORMED_BODY_MESSAGE));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string: {err}");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(MALFORMED_QUERY_MESSAGE));
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse::new(NOT_FOUND_MESSAGE));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::forms::FieldErrors;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn user_errors_map_to_client_statuses() {
        let mut fields = FieldErrors::new();
        fields.insert("email", "Invalid email address");

        let cases = [
            (ServiceError::Validation(fields), StatusCode::BAD_REQUEST),
            (ServiceError::Form("Search query is required".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("taken".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(service_error_response(err).status(), status);
        }
    }

    #[test]
    fn unexpected_errors_are_server_errors() {
        let err = ServiceError::Repository(RepositoryError::DatabaseError("disk I/O".into()));
        assert_eq!(
            service_error_response(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
