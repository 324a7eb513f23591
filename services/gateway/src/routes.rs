use actix_web::web;
use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/message-process")
                .route("/start", web::post().to(handlers::start_process))
                .route("/order", web::post().to(handlers::order_process))
                .route("/dataformat", web::post().to(handlers::data_format_process)),
        );
}
