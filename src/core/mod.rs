pub mod ai;
pub mod data;
pub mod notes;
pub mod prompt;
pub mod render;

pub use ai::{GenerationClient, OpenAiClient};
pub use notes::{NoteOutcome, NotesService};
pub use prompt::{build_prompt, PromptTemplate, CANONICAL_TEMPLATE};
