//! Per-session state.

use std::path::{Path, PathBuf};
use std::time::Instant;

use pp_schema::WebsiteStructure;

use crate::error::ExportError;
use crate::settings::Fingerprint;

/// Display state of a session relative to the current settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The current settings are the ones last generated.
    Idle,
    /// The settings changed since the last generation.
    PendingChange,
}

/// Result of one generation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Generation number within the session, starting at 1.
    pub generation: u64,
    /// Completed cycles in the session, starting at 1. Never reset, so it
    /// keeps export names unique after [`SessionContext::reset_stats`].
    pub cycle: u64,
    pub structure: WebsiteStructure,
    /// Rendered HTML document.
    pub markup: String,
    /// Whether the structure is the fallback.
    pub fallback: bool,
}

/// Paths written by [`Artifact::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub html: PathBuf,
    pub json: PathBuf,
}

impl Artifact {
    /// Write the markup and the structure JSON into `dir`.
    ///
    /// File names combine the caller's `stamp` (typically a unix
    /// timestamp) with the cycle number. The directory is created if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the directory or files cannot be written.
    pub fn export(&self, dir: &Path, stamp: u64) -> Result<ExportedFiles, ExportError> {
        std::fs::create_dir_all(dir)?;

        let html = dir.join(format!("website_{stamp}_{}.html", self.cycle));
        let json = dir.join(format!("website_structure_{stamp}_{}.json", self.cycle));

        std::fs::write(&html, &self.markup)?;
        std::fs::write(&json, self.structure.to_json_pretty()?)?;

        Ok(ExportedFiles { html, json })
    }
}

/// Mutable state owned by one session.
#[derive(Debug, Default)]
pub struct SessionContext {
    last_applied: Option<Fingerprint>,
    last_generation_at: Option<Instant>,
    generation_count: u64,
    cycles: u64,
    artifact: Option<Artifact>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings of the last completed generation.
    #[must_use]
    pub fn last_applied(&self) -> Option<&Fingerprint> {
        self.last_applied.as_ref()
    }

    /// When the last generation was triggered. `None` if never.
    #[must_use]
    pub fn last_generation_at(&self) -> Option<Instant> {
        self.last_generation_at
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Latest artifact, if any generation completed.
    #[must_use]
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Display state for the given settings.
    #[must_use]
    pub fn state(&self, current: &Fingerprint) -> SessionState {
        if self.last_applied.as_ref() == Some(current) {
            SessionState::Idle
        } else {
            SessionState::PendingChange
        }
    }

    pub(crate) fn mark_triggered(&mut self, now: Instant) {
        self.last_generation_at = Some(now);
    }

    /// Record a completed generation and return the stored artifact.
    pub fn commit(
        &mut self,
        applied: Fingerprint,
        structure: WebsiteStructure,
        markup: String,
        fallback: bool,
    ) -> &Artifact {
        self.last_applied = Some(applied);
        self.generation_count += 1;
        self.cycles += 1;
        self.artifact.insert(Artifact {
            generation: self.generation_count,
            cycle: self.cycles,
            structure,
            markup,
            fallback,
        })
    }

    /// Zero the generation counter. The current artifact and the cycle
    /// sequence are kept.
    pub fn reset_stats(&mut self) {
        self.generation_count = 0;
    }
}
