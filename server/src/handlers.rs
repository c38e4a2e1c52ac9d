use actix_web::{web, HttpResponse, Responder};
use gallery_services::{GalleryError, GalleryService};
use gallery_shared::{ApprovedFilter, NewThemeImage, ThemeImageUpdate};

pub struct AppState {
    pub gallery: GalleryService,
}

fn error_response(context: &str, err: GalleryError) -> HttpResponse {
    match err {
        GalleryError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
            "message": err.to_string()
        })),
        GalleryError::Validation(message) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": message
        })),
        GalleryError::Database(e) => {
            log::error!("{}: {}", context, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": e.to_string()
            }))
        }
    }
}

/// Approved records, optionally narrowed by websiteType / designTone.
pub async fn get_approved_images(
    state: web::Data<AppState>,
    query: web::Query<ApprovedFilter>,
) -> impl Responder {
    match state.gallery.list_approved(&query).await {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(e) => error_response("Failed to get approved images", e),
    }
}

/// Add a new image; it enters the catalog as Pending.
pub async fn add_image(
    state: web::Data<AppState>,
    body: web::Json<NewThemeImage>,
) -> impl Responder {
    match state.gallery.create(body.into_inner()).await {
        Ok(image) => HttpResponse::Created().json(image),
        Err(e) => error_response("Failed to add image", e),
    }
}

/// Overwrite fields of an existing image.
pub async fn update_image(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ThemeImageUpdate>,
) -> impl Responder {
    let id = path.into_inner();
    match state.gallery.update(id, body.into_inner()).await {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(e) => error_response("Failed to update image", e),
    }
}

/// Remove an image from the catalog.
pub async fn delete_image(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match state.gallery.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Image deleted successfully"
        })),
        Err(e) => error_response("Failed to delete image", e),
    }
}

/// Every record regardless of status, newest first, for the vendor dashboard.
pub async fn get_vendor_images(state: web::Data<AppState>) -> impl Responder {
    match state.gallery.list_all().await {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(e) => error_response("Failed to get vendor images", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use actix_web::{test, App};
    use gallery_shared::{ImageStatus, ThemeImage, WebsiteType};
    use migration::Migrator;
    use sea_orm_migration::MigratorTrait;

    async fn test_state() -> web::Data<AppState> {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        web::Data::new(AppState {
            gallery: GalleryService::new(db),
        })
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(routes::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn add_returns_created_pending_record() {
        let state = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/images/add")
            .set_json(serde_json::json!({
                "imageUrl": "a.png",
                "websiteType": "Informative",
                "designTone": "Relax",
                "status": "Approved"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let created: ThemeImage = test::read_body_json(resp).await;
        assert_eq!(created.status, ImageStatus::Pending);
        assert_eq!(created.image_url, "a.png");
    }

    #[actix_web::test]
    async fn add_rejects_unknown_enum_value() {
        let state = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/images/add")
            .set_json(serde_json::json!({
                "imageUrl": "a.png",
                "websiteType": "Blog",
                "designTone": "Relax"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.get("message").is_some());
    }

    #[actix_web::test]
    async fn get_approved_applies_filters_and_ignores_empty_params() {
        let state = test_state().await;
        let app = test_app!(state);

        // One approved e-commerce image, one pending informative image.
        let req = test::TestRequest::post()
            .uri("/api/images/add")
            .set_json(serde_json::json!({
                "imageUrl": "shop.png",
                "websiteType": "E-commerce",
                "designTone": "Professional"
            }))
            .to_request();
        let created: ThemeImage =
            test::read_body_json(test::call_service(&app, req).await).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/images/update/{}", created.id))
            .set_json(serde_json::json!({ "status": "Approved" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/images/add")
            .set_json(serde_json::json!({
                "imageUrl": "info.png",
                "websiteType": "Informative",
                "designTone": "Relax"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/images/get-approved?websiteType=E-commerce&designTone=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let images: Vec<ThemeImage> = test::read_body_json(resp).await;

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].website_type, WebsiteType::ECommerce);
        assert_eq!(images[0].status, ImageStatus::Approved);
    }

    #[actix_web::test]
    async fn update_missing_id_is_404() {
        let state = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/images/update/999")
            .set_json(serde_json::json!({ "status": "Approved" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Image not found: 999");
    }

    #[actix_web::test]
    async fn delete_then_delete_again_is_404() {
        let state = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/images/add")
            .set_json(serde_json::json!({
                "imageUrl": "a.png",
                "websiteType": "Service-Based",
                "designTone": "Relax"
            }))
            .to_request();
        let created: ThemeImage =
            test::read_body_json(test::call_service(&app, req).await).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/images/delete/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Image deleted successfully");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/images/delete/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn vendor_images_lists_everything_newest_first() {
        let state = test_state().await;
        let app = test_app!(state);

        for url in ["1.png", "2.png"] {
            let req = test::TestRequest::post()
                .uri("/api/images/add")
                .set_json(serde_json::json!({
                    "imageUrl": url,
                    "websiteType": "Informative",
                    "designTone": "Professional"
                }))
                .to_request();
            test::call_service(&app, req).await;
            actix_web::rt::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/images/vendor-images")
            .to_request();
        let images: Vec<ThemeImage> =
            test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].image_url, "2.png");
        assert_eq!(images[1].image_url, "1.png");
    }
}
