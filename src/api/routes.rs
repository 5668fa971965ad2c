use actix_web::web;

use super::handlers;
use crate::error::NoteError;

/// Largest JSON body accepted (both notes plus an edited prompt).
const JSON_LIMIT: usize = 256 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(|err, _req| {
                NoteError::Validation(format!("Invalid form data: {}", err)).into()
            }),
    )
    .service(
        web::scope("/api")
            .route("/status", web::get().to(handlers::status))
            .route("/prompt", web::post().to(handlers::preview_prompt))
            .route("/notes", web::post().to(handlers::generate_notes))
            .route("/notes/download", web::post().to(handlers::download_notes)),
    );
}
