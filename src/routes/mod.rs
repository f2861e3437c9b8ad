// Route exports
pub mod ads;

use actix_web::web;

pub use ads::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(ads::configure_legacy).service(
        web::scope("/api/v1")
            .configure(ads::configure),
    );
}
