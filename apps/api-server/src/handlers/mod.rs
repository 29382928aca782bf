//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}

/// Malformed or mistyped JSON bodies are client errors, rendered like any other.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        let response = actix_web::ResponseError::error_response(&AppError::BadRequest(
            err.to_string(),
        ));
        error::InternalError::from_response(err, response).into()
    })
}

/// Unparseable query strings, such as a repeated `term`, get the same error body.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected query string: {}", err);
        let response = actix_web::ResponseError::error_response(&AppError::BadRequest(
            err.to_string(),
        ));
        error::InternalError::from_response(err, response).into()
    })
}

/// A non-numeric post id can never match a row.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = actix_web::ResponseError::error_response(&AppError::NotFound(
            "Blog post not found.".to_string(),
        ));
        error::InternalError::from_response(err, response).into()
    })
}
