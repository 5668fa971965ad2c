use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::ai::GenerationClient;
use super::{data, prompt, render};
use crate::error::{BackendError, NoteError};
use crate::models::{DisplayedNote, DownloadArtifact, GeneratedNote, NoteForm};

/// Result of one successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct NoteOutcome {
    pub note: DisplayedNote,
    pub artifact: DownloadArtifact,
    /// `YYYYMMDD_HHMMSS`, as stamped on the artifact.
    pub generated_at: String,
}

enum Backend {
    Ready(Arc<dyn GenerationClient>),
    Unconfigured(String),
}

/// Collector -> builder -> client -> renderer, once per user action.
///
/// Built once at startup. Without a credential the service still runs, but
/// every generation attempt is refused before any call is made.
pub struct NotesService {
    backend: Backend,
}

impl NotesService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            backend: Backend::Ready(client),
        }
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unconfigured(reason.into()),
        }
    }

    /// Ok when generation can be attempted.
    pub fn readiness(&self) -> Result<(), NoteError> {
        self.client().map(|_| ())
    }

    fn client(&self) -> Result<&Arc<dyn GenerationClient>, NoteError> {
        match &self.backend {
            Backend::Ready(client) => Ok(client),
            Backend::Unconfigured(reason) => Err(NoteError::Configuration(reason.clone())),
        }
    }

    /// The prompt that would be sent for this form, for review and editing.
    /// Any previously edited prompt in the form is ignored and rebuilt.
    pub fn preview(&self, form: &NoteForm) -> Result<String, NoteError> {
        let input = data::collect(&NoteForm {
            prompt: None,
            ..form.clone()
        })?;
        Ok(prompt::build_prompt(
            input.order_note.as_str(),
            input.observation_note.as_str(),
        ))
    }

    #[instrument(skip_all, fields(order_len = form.order_note.len()))]
    pub async fn submit(&self, form: &NoteForm, at: NaiveDateTime) -> Result<NoteOutcome, NoteError> {
        let client = self.client()?;
        let input = data::collect(form)?;

        let prompt = match input.edited_prompt {
            Some(ref edited) => edited.clone(),
            None => prompt::build_prompt(
                input.order_note.as_str(),
                input.observation_note.as_str(),
            ),
        };

        let text = client.generate(&prompt).await.map_err(|e| {
            warn!(error = %e, "Generation failed");
            NoteError::from(e)
        })?;
        let generated = GeneratedNote::new(text).ok_or(BackendError::EmptyResponse)?;

        info!(
            edited_prompt = input.edited_prompt.is_some(),
            has_patient = input.patient.is_some(),
            "Nursing note generated"
        );

        Ok(NoteOutcome {
            generated_at: render::timestamp(at),
            note: render::render(&generated),
            artifact: render::build_artifact(
                input.patient.as_ref(),
                &input.order_note,
                &input.observation_note,
                &generated,
                at,
            ),
        })
    }

    /// Rebuilds the artifact for a note generated earlier.
    pub fn artifact(
        &self,
        form: &NoteForm,
        generated_note: &str,
        at: NaiveDateTime,
    ) -> Result<DownloadArtifact, NoteError> {
        let input = data::collect(form)?;
        let generated = GeneratedNote::new(generated_note).ok_or_else(|| {
            NoteError::Validation("There is no generated note to download yet.".into())
        })?;
        Ok(render::build_artifact(
            input.patient.as_ref(),
            &input.order_note,
            &input.observation_note,
            &generated,
            at,
        ))
    }
}
