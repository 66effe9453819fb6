//! Regeneration scheduling.
//!
//! Decides, once per interaction event, whether a generation cycle should
//! run. Automatic generation needs a settings change, a non-blank prompt and
//! a debounce interval since the last generation. Manual generation only
//! needs a non-blank prompt.

use std::time::{Duration, Instant};

use crate::context::SessionContext;
use crate::settings::Fingerprint;

/// What started a generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Automatic,
    Manual,
}

impl Trigger {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
        }
    }
}

/// Outcome of one scheduler evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Settings match the last generation.
    Idle,
    /// Settings changed but no generation is due yet.
    Pending,
    /// Manual generation is unavailable because the prompt is blank.
    Disabled,
    /// Run a generation cycle now.
    Generate(Trigger),
}

/// Debounced change detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    automatic: bool,
    debounce: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(true, Duration::from_secs(1))
    }
}

impl Scheduler {
    #[must_use]
    pub fn new(automatic: bool, debounce: Duration) -> Self {
        Self {
            automatic,
            debounce,
        }
    }

    #[must_use]
    pub fn automatic(&self) -> bool {
        self.automatic
    }

    pub fn set_automatic(&mut self, automatic: bool) {
        self.automatic = automatic;
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Evaluate the current settings against the session.
    ///
    /// On [`Decision::Generate`] the generation timestamp is stamped before
    /// returning, so a second evaluation at the same instant stays quiet.
    pub fn evaluate(
        &self,
        ctx: &mut SessionContext,
        current: &Fingerprint,
        now: Instant,
    ) -> Decision {
        if ctx.last_applied() == Some(current) {
            return Decision::Idle;
        }
        if self.automatic && current.has_prompt() && self.debounce_elapsed(ctx, now) {
            ctx.mark_triggered(now);
            return Decision::Generate(Trigger::Automatic);
        }
        Decision::Pending
    }

    /// Handle an explicit generate request.
    ///
    /// Bypasses change detection and debounce.
    pub fn manual_trigger(
        &self,
        ctx: &mut SessionContext,
        current: &Fingerprint,
        now: Instant,
    ) -> Decision {
        if !current.has_prompt() {
            return Decision::Disabled;
        }
        ctx.mark_triggered(now);
        Decision::Generate(Trigger::Manual)
    }

    /// Strictly more than the debounce interval since the last generation.
    fn debounce_elapsed(&self, ctx: &SessionContext, now: Instant) -> bool {
        match ctx.last_generation_at() {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.debounce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GenerationSettings;
    use pp_schema::{ColorScheme, Layout, WebsiteStructure};
    use pretty_assertions::assert_eq;

    fn fingerprint(prompt: &str) -> Fingerprint {
        GenerationSettings {
            prompt: prompt.to_owned(),
            ..GenerationSettings::default()
        }
        .fingerprint()
    }

    fn structure() -> WebsiteStructure {
        WebsiteStructure {
            title: "T".to_owned(),
            description: String::new(),
            sections: Vec::new(),
            color_scheme: ColorScheme::Primary,
            layout: Layout::Default,
        }
    }

    fn commit(ctx: &mut SessionContext, fp: &Fingerprint) {
        ctx.commit(fp.clone(), structure(), String::new(), false);
    }

    #[test]
    fn test_first_change_generates() {
        let scheduler = Scheduler::default();
        let mut ctx = SessionContext::new();
        let now = Instant::now();
        assert_eq!(
            scheduler.evaluate(&mut ctx, &fingerprint("A bakery"), now),
            Decision::Generate(Trigger::Automatic)
        );
        assert_eq!(ctx.last_generation_at(), Some(now));
    }

    #[test]
    fn test_unchanged_settings_are_idle() {
        let scheduler = Scheduler::default();
        let mut ctx = SessionContext::new();
        let fp = fingerprint("A bakery");
        let start = Instant::now();

        assert_eq!(
            scheduler.evaluate(&mut ctx, &fp, start),
            Decision::Generate(Trigger::Automatic)
        );
        commit(&mut ctx, &fp);

        let later = start + Duration::from_secs(60);
        assert_eq!(scheduler.evaluate(&mut ctx, &fp, later), Decision::Idle);
        assert_eq!(scheduler.evaluate(&mut ctx, &fp, later), Decision::Idle);
        assert_eq!(ctx.generation_count(), 1);
    }

    #[test]
    fn test_evaluate_twice_without_commit_generates_once() {
        let scheduler = Scheduler::default();
        let mut ctx = SessionContext::new();
        let fp = fingerprint("A bakery");
        let now = Instant::now();

        assert_eq!(
            scheduler.evaluate(&mut ctx, &fp, now),
            Decision::Generate(Trigger::Automatic)
        );
        assert_eq!(scheduler.evaluate(&mut ctx, &fp, now), Decision::Pending);
    }

    #[test]
    fn test_debounce_is_strict() {
        let debounce = Duration::from_millis(1000);
        let scheduler = Scheduler::new(true, debounce);
        let mut ctx = SessionContext::new();
        let start = Instant::now();

        let first = fingerprint("v1");
        assert_eq!(
            scheduler.evaluate(&mut ctx, &first, start),
            Decision::Generate(Trigger::Automatic)
        );
        commit(&mut ctx, &first);

        let second = fingerprint("v2");
        assert_eq!(
            scheduler.evaluate(&mut ctx, &second, start + Duration::from_millis(500)),
            Decision::Pending
        );
        assert_eq!(
            scheduler.evaluate(&mut ctx, &second, start + debounce),
            Decision::Pending
        );
        assert_eq!(
            scheduler.evaluate(&mut ctx, &second, start + debounce + Duration::from_millis(1)),
            Decision::Generate(Trigger::Automatic)
        );
    }

    #[test]
    fn test_blank_prompt_never_generates_automatically() {
        let scheduler = Scheduler::default();
        let mut ctx = SessionContext::new();
        assert_eq!(
            scheduler.evaluate(&mut ctx, &fingerprint("  "), Instant::now()),
            Decision::Pending
        );
        assert_eq!(ctx.last_generation_at(), None);
    }

    #[test]
    fn test_manual_mode_waits_for_trigger() {
        let scheduler = Scheduler::new(false, Duration::ZERO);
        let mut ctx = SessionContext::new();
        let fp = fingerprint("A bakery");
        let now = Instant::now();

        assert_eq!(scheduler.evaluate(&mut ctx, &fp, now), Decision::Pending);
        assert_eq!(
            scheduler.manual_trigger(&mut ctx, &fp, now),
            Decision::Generate(Trigger::Manual)
        );
    }

    #[test]
    fn test_manual_trigger_bypasses_equality_and_debounce() {
        let scheduler = Scheduler::new(true, Duration::from_secs(30));
        let mut ctx = SessionContext::new();
        let fp = fingerprint("A bakery");
        let now = Instant::now();

        assert_eq!(
            scheduler.evaluate(&mut ctx, &fp, now),
            Decision::Generate(Trigger::Automatic)
        );
        commit(&mut ctx, &fp);

        assert_eq!(
            scheduler.manual_trigger(&mut ctx, &fp, now),
            Decision::Generate(Trigger::Manual)
        );
        assert_eq!(
            scheduler.manual_trigger(&mut ctx, &fp, now),
            Decision::Generate(Trigger::Manual)
        );
    }

    #[test]
    fn test_manual_trigger_disabled_for_blank_prompt() {
        let scheduler = Scheduler::default();
        let mut ctx = SessionContext::new();
        assert_eq!(
            scheduler.manual_trigger(&mut ctx, &fingerprint(""), Instant::now()),
            Decision::Disabled
        );
        assert_eq!(ctx.last_generation_at(), None);
    }

    #[test]
    fn test_manual_trigger_restarts_debounce() {
        let debounce = Duration::from_secs(2);
        let scheduler = Scheduler::new(true, debounce);
        let mut ctx = SessionContext::new();
        let start = Instant::now();

        let fp = fingerprint("v1");
        let _ = scheduler.manual_trigger(&mut ctx, &fp, start);
        commit(&mut ctx, &fp);

        let changed = fingerprint("v2");
        assert_eq!(
            scheduler.evaluate(&mut ctx, &changed, start + Duration::from_secs(1)),
            Decision::Pending
        );
    }
}
