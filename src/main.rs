//! Nursing Notes Assistant
//!
//! Main entry point: loads configuration, constructs the generation client
//! once, and serves the notes form.

use std::sync::Arc;

use actix_files as fs;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use nursing_notes::api::{self, AppState};
use nursing_notes::config;
use nursing_notes::core::{NotesService, OpenAiClient};
use nursing_notes::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = config::load_config().context("Failed to load configuration")?;

    telemetry::init(&config.logging);

    // The credential is read once; without it the form still loads and reports the problem.
    let notes = match config.generation.credential() {
        Some(api_key) => {
            let client = OpenAiClient::new(&config.generation, api_key)
                .context("Failed to create generation client")?;
            info!(model = client.model(), "Generation client ready");
            NotesService::new(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; note generation is disabled");
            NotesService::unconfigured(
                "OPENAI_API_KEY is not set. Add it to the environment or .env file and restart.",
            )
        }
    };

    let app_state = web::Data::new(AppState {
        notes,
        model: config.generation.model.clone(),
    });

    let bind = (config.server.host.clone(), config.server.port);
    info!("Listening on {}:{}", bind.0, bind.1);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            // API routes
            .configure(api::configure)
            // Serve the form page from the web directory
            .service(fs::Files::new("/", "./web").index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
