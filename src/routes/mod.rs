// Route exports
pub mod chat;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(chat::configure);
}
