//! Session state and regeneration scheduling for PromptPixel.
//!
//! A session owns one [`SessionContext`] and re-evaluates the
//! [`Scheduler`] once per interaction event. When a generation is due the
//! [`Session`] composes the prompt, acquires a structure, renders it and
//! commits the resulting [`Artifact`].
//!
//! There are no background timers: time only advances through the `now`
//! passed to each call, which keeps scheduling deterministic under test.

mod context;
mod error;
mod scheduler;
mod session;
mod settings;

pub use context::{Artifact, ExportedFiles, SessionContext, SessionState};
pub use error::ExportError;
pub use scheduler::{Decision, Scheduler, Trigger};
pub use session::{CycleReport, Session};
pub use settings::{
    AdvancedOptions, ContentDepth, Enhancements, Fingerprint, GenerationSettings, Template,
    compose_prompt,
};
