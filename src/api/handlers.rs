use actix_web::{http::header, web, HttpResponse};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::render::TIMESTAMP_FORMAT;
use crate::core::{NotesService, CANONICAL_TEMPLATE};
use crate::error::NoteError;
use crate::models::NoteForm;

/// Shared, immutable application state.
pub struct AppState {
    pub notes: NotesService,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub model: String,
    pub template_version: &'static str,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub form: NoteForm,
    #[serde(default)]
    pub generated_note: String,
    /// Stamp returned with the note by `/api/notes`; the artifact is
    /// re-stamped with the current time when it is absent.
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// Lets the page show a missing credential before anything is submitted.
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    let readiness = state.notes.readiness();
    HttpResponse::Ok().json(StatusResponse {
        ready: readiness.is_ok(),
        model: state.model.clone(),
        template_version: CANONICAL_TEMPLATE.version,
        message: readiness.err().map(|e| e.to_string()),
    })
}

pub async fn preview_prompt(
    state: web::Data<AppState>,
    form: web::Json<NoteForm>,
) -> Result<HttpResponse, NoteError> {
    let prompt = state.notes.preview(&form)?;
    Ok(HttpResponse::Ok().json(PromptResponse { prompt }))
}

#[instrument(skip_all)]
pub async fn generate_notes(
    state: web::Data<AppState>,
    form: web::Json<NoteForm>,
) -> Result<HttpResponse, NoteError> {
    let outcome = state
        .notes
        .submit(&form, Local::now().naive_local())
        .await?;
    info!(filename = %outcome.artifact.filename, "Returning generated note");
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn download_notes(
    state: web::Data<AppState>,
    body: web::Json<DownloadRequest>,
) -> Result<HttpResponse, NoteError> {
    let at = match body.generated_at.as_deref().map(str::trim) {
        Some(stamp) if !stamp.is_empty() => NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .map_err(|_| {
                NoteError::Validation(format!(
                    "Invalid generation time {:?}, expected YYYYMMDD_HHMMSS.",
                    stamp
                ))
            })?,
        _ => Local::now().naive_local(),
    };

    let artifact = state
        .notes
        .artifact(&body.form, &body.generated_note, at)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ))
        .body(artifact.content))
}
