//! HTTP handlers and route configuration.

mod health;
mod post;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/post")
                .route("", web::get().to(post::find_all_posts))
                .route("", web::post().to(post::save_post))
                .route("/{id}", web::get().to(post::find_post_by_id))
                .route("/{id}", web::put().to(post::update_post_by_id))
                .route("/{id}", web::delete().to(post::delete_post_by_id)),
        );
}
