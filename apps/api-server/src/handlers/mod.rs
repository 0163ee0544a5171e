//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod upload;


use actix_web::{HttpRequest, HttpResponse, web};
use blog_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .service(
                        web::resource("")
                            .route(web::get().to(blogs::list_blogs))
                            .route(web::post().to(blogs::create_blog)),
                    )
                    .route("/create", web::post().to(blogs::create_blog))
                    // Fixed segments must be registered before `/{id}`
                    .route("/summary", web::get().to(blogs::list_summaries))
                    .route("/featured", web::get().to(blogs::list_featured))
                    .route("/categories", web::get().to(blogs::list_categories))
                    .route(
                        "/category/{category:[^/]*}",
                        web::get().to(blogs::get_by_category),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(blogs::get_blog))
                            .route(web::put().to(blogs::update_blog))
                            .route(web::delete().to(blogs::delete_blog)),
                    )
                    .service(
                        web::resource("/{id}/feature")
                            .route(web::patch().to(blogs::toggle_featured))
                            .route(web::put().to(blogs::toggle_featured)),
                    ),
            )
            .service(
                web::scope("/upload")
                    .route("/image", web::post().to(upload::upload_image))
                    .route("/video", web::post().to(upload::upload_video)),
            ),
    );
}

/// Default service - unmatched routes get a 404 problem response.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorResponse::not_found("No route matches this request").with_instance(req.path()),
    )
}
