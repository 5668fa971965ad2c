use serde::{Deserialize, Serialize};
use validator::Validate;

use super::patient::PatientMetadata;

/// Raw form submission, exactly as the page sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoteForm {
    #[serde(default)]
    #[validate(length(max = 20000, message = "The order note is too long (20000 characters max)."))]
    pub order_note: String,

    #[serde(default)]
    #[validate(length(
        max = 20000,
        message = "The observation note is too long (20000 characters max)."
    ))]
    pub observation_note: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "Patient name must be 100 characters or fewer."))]
    pub patient_name: Option<String>,

    #[serde(default)]
    #[validate(range(max = 120, message = "Age must be between 0 and 120."))]
    pub age: Option<u32>,

    #[serde(default)]
    #[validate(length(max = 100, message = "Room must be 100 characters or fewer."))]
    pub room: Option<String>,

    #[serde(default)]
    pub admission_date: Option<chrono::NaiveDate>,

    /// Prompt as edited by the user after previewing it.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// The doctor's order note. Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNote(String);

impl OrderNote {
    /// Trims the text; `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Optional nursing observations; empty when not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationNote(String);

impl ObservationNote {
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.map(str::trim).unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated input for one generation request.
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub order_note: OrderNote,
    pub observation_note: ObservationNote,
    pub patient: Option<PatientMetadata>,
    pub edited_prompt: Option<String>,
}

/// Text returned by the generation backend. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNote(String);

impl GeneratedNote {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The generated note as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedNote {
    pub formatted: String,
    pub raw: String,
}

/// Plain-text record offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadArtifact {
    pub filename: String,
    pub content: String,
}
