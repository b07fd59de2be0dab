//! Entity structs for all Uplift domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod experiment;
mod member;
mod note;
mod project;
mod variant;

pub use experiment::Experiment;
pub use member::Member;
pub use note::Note;
pub use project::Project;
pub use variant::Variant;
