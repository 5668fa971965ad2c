//! Request-scoped values passed between the workflow stages.

pub mod note;
pub mod patient;

pub use note::{
    DisplayedNote, DownloadArtifact, GeneratedNote, NoteForm, NoteInput, ObservationNote, OrderNote,
};
pub use patient::PatientMetadata;
