use crate::handlers;
use actix_web::{web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings get the same {"message": ...}
    // envelope as the handlers, with a 400 instead of the store's 500.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
        )
        .into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
        )
        .into()
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        // Browsing endpoint
        .route(
            "/api/images/get-approved",
            web::get().to(handlers::get_approved_images),
        )
        // Vendor endpoints
        .route("/api/images/add", web::post().to(handlers::add_image))
        .route(
            "/api/images/update/{id}",
            web::put().to(handlers::update_image),
        )
        .route(
            "/api/images/delete/{id}",
            web::delete().to(handlers::delete_image),
        )
        .route(
            "/api/images/vendor-images",
            web::get().to(handlers::get_vendor_images),
        );
}
