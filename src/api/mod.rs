//! HTTP boundary for the notes form.
//!
//! JSON endpoints under `/api`; the page itself is served from `web/`.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::configure;
